// ============================================================================
// AUCTION DETAIL STATE - fetch lifecycle, modal slot, action outcomes
// ============================================================================
// Pure state: every method returns what the page must do next (fetch,
// navigate) and the component carries it out.
// ============================================================================

use crate::models::AuctionDetails;
use crate::router::Route;
use crate::services::ApiError;
use crate::state::loadable::{Loadable, RequestSequence, RequestToken};
use crate::state::modal::ModalHost;

/// Child view shown inside the modal
#[derive(Clone, Debug, PartialEq)]
pub enum ModalContent {
    Bid {
        auction_id: String,
        current_bid_price: u64,
        buy_now_price: u64,
    },
    BuyNow {
        auction_id: String,
        buy_now_price: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIntent {
    Bid,
    BuyNow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailEffect {
    Fetch { token: RequestToken, auction_id: String },
    Navigate(Route),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Response belonged to a superseded request
    Ignored,
    /// New snapshot in place; action guards must be replaced
    Loaded,
    Failed,
    Redirect(Route),
}

#[derive(Debug, Default)]
pub struct AuctionDetailState {
    auction_id: Option<String>,
    refetch_trigger: bool,
    sequence: RequestSequence,
    details: Loadable<AuctionDetails>,
    modal: ModalHost<ModalContent>,
}

impl AuctionDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount, or the route's auction id changed. A form opened for the
    /// previous auction does not survive the switch.
    pub fn set_route(&mut self, auction_id: Option<String>) -> DetailEffect {
        self.auction_id = auction_id;
        self.details = Loadable::Loading;
        self.modal = ModalHost::default();
        self.request()
    }

    /// Flips the re-fetch trigger; always yields exactly one fetch
    pub fn toggle_trigger(&mut self) -> DetailEffect {
        self.refetch_trigger = !self.refetch_trigger;
        self.request()
    }

    fn request(&mut self) -> DetailEffect {
        // Advancing the sequence also fences any request still in flight
        let token = self.sequence.next();
        match &self.auction_id {
            Some(id) => DetailEffect::Fetch {
                token,
                auction_id: id.clone(),
            },
            None => DetailEffect::Navigate(Route::NotFound),
        }
    }

    pub fn apply_fetch(&mut self, token: RequestToken, result: Result<AuctionDetails, ApiError>) -> FetchOutcome {
        if !self.sequence.is_current(token) {
            log::debug!("⏭️ Discarding stale auction response");
            return FetchOutcome::Ignored;
        }

        match result {
            Ok(details) => {
                self.details = Loadable::Loaded(details);
                FetchOutcome::Loaded
            }
            Err(ApiError::NotFound) => {
                log::warn!("⚠️ Auction {:?} not found", self.auction_id);
                FetchOutcome::Redirect(Route::NotFound)
            }
            Err(e) => {
                log::error!("❌ Failed to load auction {:?}: {}", self.auction_id, e);
                self.details = Loadable::Failed(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Builds the modal child for `intent` from the current snapshot.
    /// `None` while nothing is loaded.
    pub fn modal_content_for(&self, intent: ActionIntent) -> Option<ModalContent> {
        let auction_id = self.auction_id.clone()?;
        let details = self.details.loaded()?;

        Some(match intent {
            ActionIntent::Bid => ModalContent::Bid {
                auction_id,
                current_bid_price: details.current_bid_price,
                buy_now_price: details.buy_now_price,
            },
            ActionIntent::BuyNow => ModalContent::BuyNow {
                auction_id,
                buy_now_price: details.buy_now_price,
            },
        })
    }

    pub fn open_modal(&mut self, content: ModalContent) {
        self.modal.open_with(content);
    }

    /// Close request from the overlay or its close button
    pub fn toggle_modal(&mut self) {
        self.modal.toggle();
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn modal(&self) -> &ModalHost<ModalContent> {
        &self.modal
    }

    pub fn details(&self) -> &Loadable<AuctionDetails> {
        &self.details
    }

    pub fn auction_id(&self) -> Option<&str> {
        self.auction_id.as_deref()
    }

    pub fn refetch_trigger(&self) -> bool {
        self.refetch_trigger
    }
}

/// Only an explicit `true` from the backend counts as deleted
pub fn delete_outcome(result: Result<bool, ApiError>) -> Result<Route, ApiError> {
    match result {
        Ok(true) => Ok(Route::Home),
        Ok(false) => Err(ApiError::Rejected),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(current: u64, buy_now: u64) -> AuctionDetails {
        AuctionDetails {
            auction_id: "42".to_string(),
            title: "Desk lamp".to_string(),
            auction_user_nickname: "seller".to_string(),
            auction_user_rating: Some(4.0),
            current_bid_price: current,
            buy_now_price: buy_now,
            description: "works".to_string(),
            auction_image: vec![],
        }
    }

    fn fetch_token(effect: &DetailEffect) -> RequestToken {
        match effect {
            DetailEffect::Fetch { token, .. } => *token,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn mount_issues_one_fetch_for_route_id() {
        let mut state = AuctionDetailState::new();
        let effect = state.set_route(Some("42".to_string()));

        match effect {
            DetailEffect::Fetch { auction_id, .. } => assert_eq!(auction_id, "42"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(state.details(), Loadable::Loading));
    }

    #[test]
    fn missing_id_redirects_to_not_found() {
        let mut state = AuctionDetailState::new();
        assert_eq!(state.set_route(None), DetailEffect::Navigate(Route::NotFound));
    }

    #[test]
    fn each_trigger_toggle_issues_one_fetch_for_current_id() {
        let mut state = AuctionDetailState::new();
        state.set_route(Some("42".to_string()));

        let fetched: Vec<String> = (0..5)
            .map(|_| match state.toggle_trigger() {
                DetailEffect::Fetch { auction_id, .. } => auction_id,
                other => panic!("unexpected {:?}", other),
            })
            .collect();

        assert_eq!(fetched, vec!["42"; 5]);
        assert!(state.refetch_trigger());
    }

    #[test]
    fn late_response_for_abandoned_id_is_ignored() {
        let mut state = AuctionDetailState::new();
        let old = fetch_token(&state.set_route(Some("1".to_string())));
        let new = fetch_token(&state.set_route(Some("2".to_string())));

        let mut second = details(10, 100);
        second.auction_id = "2".to_string();
        assert_eq!(state.apply_fetch(new, Ok(second)), FetchOutcome::Loaded);

        let mut first = details(99, 999);
        first.auction_id = "1".to_string();
        assert_eq!(state.apply_fetch(old, Ok(first)), FetchOutcome::Ignored);
        assert_eq!(state.details().loaded().map(|d| d.auction_id.as_str()), Some("2"));
    }

    #[test]
    fn not_found_response_redirects() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("404".to_string())));
        assert_eq!(
            state.apply_fetch(token, Err(ApiError::NotFound)),
            FetchOutcome::Redirect(Route::NotFound)
        );
    }

    #[test]
    fn other_failures_become_failed_state() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        let outcome = state.apply_fetch(token, Err(ApiError::Network("offline".to_string())));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(state.details(), &Loadable::Failed("Network error: offline".to_string()));
    }

    #[test]
    fn intents_are_dropped_until_snapshot_arrives() {
        let mut state = AuctionDetailState::new();
        state.set_route(Some("42".to_string()));
        assert!(state.modal_content_for(ActionIntent::Bid).is_none());
        assert!(state.modal_content_for(ActionIntent::BuyNow).is_none());
    }

    #[test]
    fn intents_capture_latest_prices() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        state.apply_fetch(token, Ok(details(1_000, 9_000)));

        let token = fetch_token(&state.toggle_trigger());
        state.apply_fetch(token, Ok(details(2_000, 9_000)));

        assert_eq!(
            state.modal_content_for(ActionIntent::Bid),
            Some(ModalContent::Bid {
                auction_id: "42".to_string(),
                current_bid_price: 2_000,
                buy_now_price: 9_000,
            })
        );
        assert_eq!(
            state.modal_content_for(ActionIntent::BuyNow),
            Some(ModalContent::BuyNow {
                auction_id: "42".to_string(),
                buy_now_price: 9_000,
            })
        );
    }

    #[test]
    fn buy_now_burst_opens_modal_once_with_last_prices() {
        use crate::utils::DebounceGate;

        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        state.apply_fetch(token, Ok(details(1_000, 5_000)));

        let mut guard = DebounceGate::new();
        let tickets: Vec<_> = (0..4)
            .filter_map(|_| state.modal_content_for(ActionIntent::BuyNow))
            .map(|content| guard.schedule(content))
            .collect();

        let mut opened = 0;
        for ticket in tickets {
            if let Some(content) = guard.fire(ticket) {
                state.open_modal(content);
                opened += 1;
            }
        }

        assert_eq!(opened, 1);
        assert_eq!(
            state.modal().visible_content(),
            Some(&ModalContent::BuyNow {
                auction_id: "42".to_string(),
                buy_now_price: 5_000,
            })
        );
    }

    #[test]
    fn closing_bid_modal_leaves_no_overlay() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        state.apply_fetch(token, Ok(details(1_000, 5_000)));

        let content = state.modal_content_for(ActionIntent::Bid).unwrap();
        state.open_modal(content);
        assert!(state.modal().is_open());

        state.close_modal();
        assert!(!state.modal().is_open());
        assert!(state.modal().visible_content().is_none());
    }

    #[test]
    fn switching_auction_discards_open_form() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("1".to_string())));
        let mut first = details(100, 900);
        first.auction_id = "1".to_string();
        state.apply_fetch(token, Ok(first));
        let content = state.modal_content_for(ActionIntent::Bid).unwrap();
        state.open_modal(content);

        let token = fetch_token(&state.set_route(Some("2".to_string())));
        assert!(state.modal().visible_content().is_none());

        let mut second = details(200, 800);
        second.auction_id = "2".to_string();
        state.apply_fetch(token, Ok(second));
        assert!(!state.modal().is_open());
        assert!(state.modal().visible_content().is_none());
        assert_eq!(
            state.modal_content_for(ActionIntent::Bid),
            Some(ModalContent::Bid {
                auction_id: "2".to_string(),
                current_bid_price: 200,
                buy_now_price: 800,
            })
        );
    }

    #[test]
    fn route_id_wins_over_snapshot_id() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        let mut snapshot = details(1_000, 5_000);
        snapshot.auction_id = "0042".to_string();
        state.apply_fetch(token, Ok(snapshot));

        assert_eq!(state.auction_id(), Some("42"));
        assert!(matches!(
            state.modal_content_for(ActionIntent::BuyNow),
            Some(ModalContent::BuyNow { auction_id, .. }) if auction_id == "42"
        ));
    }

    #[test]
    fn close_request_toggles_open_modal_shut() {
        let mut state = AuctionDetailState::new();
        let token = fetch_token(&state.set_route(Some("42".to_string())));
        state.apply_fetch(token, Ok(details(1_000, 5_000)));
        let content = state.modal_content_for(ActionIntent::BuyNow).unwrap();
        state.open_modal(content);

        state.toggle_modal();
        assert!(state.modal().visible_content().is_none());
    }

    #[test]
    fn delete_navigates_home_only_on_true() {
        assert_eq!(delete_outcome(Ok(true)), Ok(Route::Home));
        assert_eq!(delete_outcome(Ok(false)), Err(ApiError::Rejected));
        assert_eq!(
            delete_outcome(Err(ApiError::Network("down".to_string()))),
            Err(ApiError::Network("down".to_string()))
        );
    }
}
