use crate::core::Viewport;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-read the window size into `viewport` and resize the canvas to match.
pub fn sync_viewport(canvas: &web::HtmlCanvasElement, viewport: &Rc<RefCell<Viewport>>) {
    let Some(window) = web::window() else {
        return;
    };
    let (w, h) = dom::window_inner_size(&window);
    let mut vp = viewport.borrow_mut();
    vp.set_pixel_ratio(window.device_pixel_ratio());
    vp.resize(w, h);
    dom::apply_viewport(canvas, &vp);
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, viewport: Rc<RefCell<Viewport>>) {
    sync_viewport(canvas, &viewport);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_viewport(&canvas_resize, &viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
