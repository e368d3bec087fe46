use web_sys::{Document, Element, HtmlElement};

use crate::config::ThemeConfig;
use crate::engine::menu::{MenuClick, MenuState};
use crate::runtime::delegate::{Delegator, Hits, Role};
use crate::runtime::dom;

fn classify(hits: &Hits, toggle: &Element, menu: &Element) -> MenuClick {
    if hits.get(Role::MenuToggle) == Some(toggle) {
        return MenuClick::Toggle;
    }
    if hits.get(Role::NavMenu) != Some(menu) {
        return MenuClick::Outside;
    }
    match hits.get(Role::Link) {
        Some(link) if menu.contains(Some(link.as_ref())) => MenuClick::MenuLink,
        _ => MenuClick::InsideMenu,
    }
}

fn apply(open: bool, toggle: &Element, menu: &Element, body: Option<&HtmlElement>) {
    dom::set_class(menu, "active", open);
    dom::set_class(toggle, "active", open);
    if let Some(body) = body {
        dom::set_class(body, "menu-open", open);
    }
}

/// Needs both the toggle button and the menu; returns `false` otherwise.
pub fn attach(document: &Document, config: &ThemeConfig, clicks: &Delegator) -> bool {
    let selectors = &config.selectors;
    let (Some(toggle), Some(menu)) = (
        dom::query_one(document, &selectors.menu_toggle),
        dom::query_one(document, &selectors.nav_menu),
    ) else {
        log::debug!("Mobile navigation skipped: toggle or menu missing");
        return false;
    };

    clicks.route(Role::MenuToggle, &selectors.menu_toggle);
    clicks.route(Role::NavMenu, &selectors.nav_menu);
    clicks.route(Role::Link, "a");

    let body = document.body();
    let mut state = MenuState::default();
    clicks.on(move |_, hits| {
        if state.on_click(classify(hits, &toggle, &menu)) {
            log::debug!("Mobile menu {}", if state.is_open() { "opened" } else { "closed" });
            apply(state.is_open(), &toggle, &menu, body.as_ref());
        }
    });
    true
}
