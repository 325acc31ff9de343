use crate::core::{Session, ShapeKind};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<Session>>) {
    let key = ev.key();
    if let Some(kind) = ShapeKind::for_key(&key) {
        session.borrow_mut().set_shape(kind);
        log::info!("[keys] shape={}", kind);
        return;
    }
    if key == "h" || key == "H" {
        if let Some(doc) = crate::dom::window_document() {
            overlay::toggle(&doc);
        }
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
