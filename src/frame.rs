use crate::core::{Session, ShapeKind, TrackingStatus, Viewport};
use crate::dom;
use crate::overlay;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub gpu: Option<render::GpuState>,
    // Last status line written to the overlay
    pub shown: Option<(TrackingStatus, ShapeKind)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut session = self.session.borrow_mut();
        session.step();

        if let Some(g) = &mut self.gpu {
            let vp = self.viewport.borrow();
            let (w, h) = vp.backing_size();
            g.resize_if_needed(w, h);
            if session.particles_mut().take_dirty() {
                g.upload_positions(session.particles().components());
            }
            if let Err(e) = g.render(&vp, session.model_matrix()) {
                log::error!("render error: {:?}", e);
            }
        }

        let current = (session.tracking().clone(), session.target());
        drop(session);
        if self.shown.as_ref() != Some(&current) {
            if let Some(doc) = dom::window_document() {
                overlay::update_status(&doc, &current.0, current.1);
            }
            self.shown = Some(current);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, particle_count: usize) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, particle_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
