// ============================================================================
// MODAL HOST STATE
// ============================================================================
// One slot, replaced wholesale. Closing keeps the last content in place so
// the closing frame never renders empty; the overlay itself is only
// rendered while open.
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ModalHost<C> {
    open: bool,
    content: Option<C>,
}

impl<C> Default for ModalHost<C> {
    fn default() -> Self {
        Self {
            open: false,
            content: None,
        }
    }
}

impl<C> ModalHost<C> {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Swaps in `content` and shows it
    pub fn open_with(&mut self, content: C) {
        self.content = Some(content);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Content to render right now; `None` means no overlay at all
    pub fn visible_content(&self) -> Option<&C> {
        if self.open {
            self.content.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_replaces_content() {
        let mut modal = ModalHost::default();
        modal.open_with("bid");
        modal.open_with("buy");
        assert_eq!(modal.visible_content(), Some(&"buy"));
    }

    #[test]
    fn close_hides_overlay_but_keeps_content() {
        let mut modal = ModalHost::default();
        modal.open_with("bid");
        modal.close();

        assert!(!modal.is_open());
        assert!(modal.visible_content().is_none());

        // Still there underneath the hidden overlay
        modal.toggle();
        assert_eq!(modal.visible_content(), Some(&"bid"));
    }

    #[test]
    fn toggle_flips_state() {
        let mut modal: ModalHost<&str> = ModalHost::default();
        modal.toggle();
        assert!(modal.is_open());
        assert!(modal.visible_content().is_none());
        modal.toggle();
        assert!(!modal.is_open());
    }
}
