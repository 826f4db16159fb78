/// Whether the mobile navigation menu is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    #[default]
    Closed,
    Open,
}

impl MenuVisibility {
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuVisibility::Open
    }
}

/// Mount state of the menu overlay. Closing keeps the overlay mounted in
/// `Collapsing` until the collapse animation has played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Unmounted,
    Shown,
    Collapsing,
}

impl OverlayPhase {
    pub fn after(self, visibility: MenuVisibility) -> Self {
        match (visibility, self) {
            (MenuVisibility::Open, _) => OverlayPhase::Shown,
            (MenuVisibility::Closed, OverlayPhase::Unmounted) => OverlayPhase::Unmounted,
            (MenuVisibility::Closed, _) => OverlayPhase::Collapsing,
        }
    }

    /// Called once the collapse timeout fires.
    pub fn collapsed(self) -> Self {
        match self {
            OverlayPhase::Collapsing => OverlayPhase::Unmounted,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != OverlayPhase::Unmounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuVisibility::default(), MenuVisibility::Closed);
        assert!(!MenuVisibility::default().is_open());
    }

    #[test]
    fn two_toggles_round_trip() {
        let start = MenuVisibility::default();
        assert_eq!(start.toggled().toggled(), start);
        assert_eq!(MenuVisibility::Open.toggled().toggled(), MenuVisibility::Open);
    }

    #[test]
    fn toggle_sequence() {
        let mut menu = MenuVisibility::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            menu = menu.toggled();
            seen.push(menu.is_open());
        }
        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn overlay_not_mounted_before_first_open() {
        let phase = OverlayPhase::default().after(MenuVisibility::Closed);
        assert_eq!(phase, OverlayPhase::Unmounted);
        assert!(!phase.is_mounted());
    }

    #[test]
    fn overlay_collapses_then_unmounts() {
        let shown = OverlayPhase::default().after(MenuVisibility::Open);
        assert_eq!(shown, OverlayPhase::Shown);

        let collapsing = shown.after(MenuVisibility::Closed);
        assert_eq!(collapsing, OverlayPhase::Collapsing);
        assert!(collapsing.is_mounted());

        assert_eq!(collapsing.collapsed(), OverlayPhase::Unmounted);
    }

    #[test]
    fn reopening_during_collapse_shows_again() {
        let phase = OverlayPhase::Collapsing.after(MenuVisibility::Open);
        assert_eq!(phase, OverlayPhase::Shown);
        assert_eq!(phase.collapsed(), OverlayPhase::Shown);
    }
}
