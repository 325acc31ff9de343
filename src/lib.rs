#![cfg(target_arch = "wasm32")]
use crate::core::{Session, SessionParams, TrackingStatus, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod tracking;

thread_local! {
    // Handle used by the exported `setShape` command.
    static ACTIVE_SESSION: RefCell<Option<Rc<RefCell<Session>>>> = const { RefCell::new(None) };
}

/// Retarget the particle cloud by shape name (`heart`, `flower`, `saturn`,
/// `spiral`, `firework`, `dna`, `birds`, `sphere`).
///
/// Unknown names are rejected and leave the current target untouched.
#[wasm_bindgen(js_name = setShape)]
pub fn set_shape(name: &str) -> Result<(), JsValue> {
    let session = ACTIVE_SESSION
        .with(|s| s.borrow().clone())
        .ok_or_else(|| JsValue::from_str("particle session not started"))?;
    let result = session.borrow_mut().set_shape_by_name(name);
    match result {
        Ok(kind) => {
            log::info!("[shape] setShape -> {}", kind);
            Ok(())
        }
        Err(e) => {
            log::warn!("[shape] setShape rejected: {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gesture-particles starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let params = SessionParams::default();
    let particle_count = params.particle_count;
    let session = Rc::new(RefCell::new(Session::new(params)));
    ACTIVE_SESSION.with(|s| *s.borrow_mut() = Some(session.clone()));

    // Size the canvas before the surface is created so the first configure matches
    let (w, h) = dom::window_inner_size(&window);
    let viewport = Rc::new(RefCell::new(Viewport::new(
        w,
        h,
        window.device_pixel_ratio(),
    )));
    events::wire_canvas_resize(&canvas, viewport.clone());
    events::wire_global_keydown(session.clone());

    let video = document
        .get_element_by_id(constants::VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());
    tracking::start_or_degrade(session.clone(), video);
    if let TrackingStatus::Unavailable(reason) = session.borrow().tracking() {
        log::warn!("continuing without hand tracking: {}", reason);
    }

    let gpu = frame::init_gpu(&canvas, particle_count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        viewport,
        gpu,
        shown: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
