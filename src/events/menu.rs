use crate::constants::MENU_TOGGLE_ID;
use crate::dom;
use reveal_core::AppStore;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The toggle is optional markup; without it the menu simply stays closed.
pub fn wire_menu_toggle(document: &web::Document, store: Rc<RefCell<AppStore>>) {
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        let mut s = store.borrow_mut();
        s.toggle_menu();
        log::info!("[menu] open={}", s.state().is_menu_open);
    });
}
