// ============================================================================
// DEBOUNCE - trailing-edge guard for repeated clicks
// ============================================================================
// DebounceGate holds the timing-free bookkeeping (which call is the latest),
// Debouncer drives it with a gloo Timeout.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::Callback;

/// Identifies one scheduled call. Only the newest ticket may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Keeps the payload of the most recent call until its window elapses.
#[derive(Debug)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Default for DebounceGate<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> DebounceGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending payload; earlier tickets become stale.
    pub fn schedule(&mut self, payload: T) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some((ticket, payload));
        ticket
    }

    /// Called when the window for `ticket` elapses.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((pending, payload)) if pending == ticket => Some(payload),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drops the pending call and invalidates every ticket handed out so far.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Emits `on_fire` with the payload of the last `call` once `window_ms`
/// passes without another call.
pub struct Debouncer<T: 'static> {
    gate: Rc<RefCell<DebounceGate<T>>>,
    timeout: Option<Timeout>,
    window_ms: u32,
    on_fire: Callback<T>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(window_ms: u32, on_fire: Callback<T>) -> Self {
        Self {
            gate: Rc::new(RefCell::new(DebounceGate::new())),
            timeout: None,
            window_ms,
            on_fire,
        }
    }

    pub fn call(&mut self, payload: T) {
        if self.gate.borrow().is_pending() {
            log::debug!("⏳ Repeated click inside the window, keeping the latest");
        }
        let ticket = self.gate.borrow_mut().schedule(payload);
        let gate = self.gate.clone();
        let on_fire = self.on_fire.clone();

        // Dropping the previous Timeout clears it
        self.timeout = Some(Timeout::new(self.window_ms, move || {
            let fired = gate.borrow_mut().fire(ticket);
            if let Some(payload) = fired {
                on_fire.emit(payload);
            }
        }));
    }

    pub fn cancel(&mut self) {
        self.gate.borrow_mut().cancel();
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }
}

impl<T: 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
