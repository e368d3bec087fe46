/// Where a document click landed relative to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    Toggle,
    MenuLink,
    InsideMenu,
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Applies a click and reports whether the open state changed.
    pub fn on_click(&mut self, click: MenuClick) -> bool {
        let next = match click {
            MenuClick::Toggle => !self.open,
            MenuClick::MenuLink | MenuClick::Outside => false,
            MenuClick::InsideMenu => self.open,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        assert!(menu.on_click(MenuClick::Toggle));
        assert!(menu.is_open());
        assert!(menu.on_click(MenuClick::Toggle));
        assert!(!menu.is_open());
    }

    #[test]
    fn link_and_outside_clicks_close() {
        let mut menu = MenuState::default();
        menu.on_click(MenuClick::Toggle);
        assert!(menu.on_click(MenuClick::MenuLink));
        assert!(!menu.is_open());

        menu.on_click(MenuClick::Toggle);
        assert!(menu.on_click(MenuClick::Outside));
        assert!(!menu.is_open());
    }

    #[test]
    fn clicks_inside_menu_keep_it_open() {
        let mut menu = MenuState::default();
        menu.on_click(MenuClick::Toggle);
        assert!(!menu.on_click(MenuClick::InsideMenu));
        assert!(menu.is_open());
    }

    #[test]
    fn closing_a_closed_menu_is_not_a_change() {
        let mut menu = MenuState::default();
        assert!(!menu.on_click(MenuClick::Outside));
        assert!(!menu.on_click(MenuClick::MenuLink));
    }
}
