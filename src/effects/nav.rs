use super::{Bindings, PageContext};
use crate::behavior::menu::{anchor_click, parse_fragment, Fragment, MenuState};
use crate::constants::{
    FRAGMENT_LINK_SELECTOR, MENU_BUTTON_ID, MENU_ICON_SELECTOR, MENU_OPEN_CLASS, NAV_MENU_ID,
};
use crate::dom::ElementRegistry;
use web_sys as web;

/// Mobile menu button plus the container whose `active` class holds the state.
#[derive(Clone)]
struct MobileMenu {
    button: web::HtmlElement,
    menu: web::HtmlElement,
}

impl MobileMenu {
    fn find(registry: &ElementRegistry) -> Option<Self> {
        Some(Self {
            button: registry.by_id(MENU_BUTTON_ID)?,
            menu: registry.by_id(NAV_MENU_ID)?,
        })
    }

    fn state(&self) -> MenuState {
        MenuState::from_open(self.menu.class_list().contains(MENU_OPEN_CLASS))
    }

    fn apply(&self, state: MenuState) {
        let cl = self.menu.class_list();
        _ = if state.is_open() {
            cl.add_1(MENU_OPEN_CLASS)
        } else {
            cl.remove_1(MENU_OPEN_CLASS)
        };
        if let Ok(Some(icon)) = self.button.query_selector(MENU_ICON_SELECTOR) {
            let (add, remove) = state.icon_classes();
            let icons = icon.class_list();
            _ = icons.add_1(add);
            _ = icons.remove_1(remove);
        }
    }
}

fn scroll_to(target: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> anyhow::Result<()> {
    let menu = MobileMenu::find(&ctx.registry);
    match &menu {
        Some(m) => {
            let m2 = m.clone();
            bindings.listen(&m.button, "click", move |_| {
                let next = m2.state().toggled();
                m2.apply(next);
                log::debug!("[nav] menu open={}", next.is_open());
            })?;
        }
        None => log::debug!("[nav] no mobile menu in markup"),
    }

    let links = ctx.registry.all(FRAGMENT_LINK_SELECTOR);
    for link in &links {
        let registry = ctx.registry.clone();
        let menu = menu.clone();
        let anchor = link.clone();
        bindings.listen(link, "click", move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let target = match parse_fragment(&href) {
                Some(Fragment::Id(id)) => registry.element_by_id(id),
                _ => None,
            };
            let outcome = anchor_click(target.is_some(), menu.is_some());
            if outcome.prevent_default {
                ev.prevent_default();
            }
            if let (true, Some(target)) = (outcome.scroll, target.as_ref()) {
                scroll_to(target);
            }
            if outcome.close_menu {
                if let Some(m) = &menu {
                    m.apply(m.state().closed());
                }
            }
        })?;
    }
    log::debug!("[nav] {} in-page links wired", links.len());
    Ok(())
}
