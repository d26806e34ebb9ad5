//! Mobile navigation menu state
//!
//! The toggle button and the navigation panel both render their `active`
//! class from a single [`MenuState`], so they can never disagree.

/// Open/closed state of the mobile menu
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Where a document click landed, relative to the menu
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickTarget {
    /// The hamburger toggle (or anything inside it)
    Toggle,
    /// A link inside the navigation panel
    MenuLink,
    /// The navigation panel, but not one of its links
    Panel,
    /// Anywhere else on the page
    Outside,
}

impl MenuState {
    /// Next state after a document click.
    pub fn on_click(self, target: ClickTarget) -> Self {
        match target {
            ClickTarget::Toggle => self.toggled(),
            ClickTarget::Panel => self,
            ClickTarget::MenuLink | ClickTarget::Outside => MenuState::Closed,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Class applied to both the toggle and the panel
    pub fn class(&self) -> &'static str {
        match self {
            MenuState::Open => "active",
            MenuState::Closed => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        let state = state.on_click(ClickTarget::Toggle);
        assert!(state.is_open());
        let state = state.on_click(ClickTarget::Toggle);
        assert!(!state.is_open());
    }

    #[test]
    fn link_and_outside_close() {
        assert_eq!(MenuState::Open.on_click(ClickTarget::MenuLink), MenuState::Closed);
        assert_eq!(MenuState::Open.on_click(ClickTarget::Outside), MenuState::Closed);
        // Idempotent close
        assert_eq!(MenuState::Closed.on_click(ClickTarget::Outside), MenuState::Closed);
    }

    #[test]
    fn panel_click_keeps_state() {
        assert_eq!(MenuState::Open.on_click(ClickTarget::Panel), MenuState::Open);
        assert_eq!(MenuState::Closed.on_click(ClickTarget::Panel), MenuState::Closed);
    }

    #[test]
    fn class_names() {
        assert_eq!(MenuState::Open.class(), "active");
        assert_eq!(MenuState::Closed.class(), "");
    }
}
