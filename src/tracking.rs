// Bindings to the MediaPipe `Hands` and `Camera` globals loaded by index.html.

use crate::constants::{
    CAPTURE_FACING_MODE, CAPTURE_HEIGHT, CAPTURE_WIDTH, HANDS_CDN_BASE, MAX_NUM_HANDS,
    MIN_DETECTION_CONFIDENCE, MIN_TRACKING_CONFIDENCE, MODEL_COMPLEXITY,
};
use crate::core::{Landmark, Session, TrackingStatus};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type Hands;

    #[wasm_bindgen(catch, constructor)]
    fn new(config: &JsValue) -> Result<Hands, JsValue>;

    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &Hands, options: &JsValue);

    #[wasm_bindgen(method, js_name = onResults)]
    fn on_results(this: &Hands, callback: &js_sys::Function);

    #[wasm_bindgen(method, catch)]
    fn send(this: &Hands, input: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = Camera)]
    type CameraUtil;

    #[wasm_bindgen(catch, constructor, js_class = "Camera")]
    fn new(video: &web::HtmlVideoElement, options: &JsValue) -> Result<CameraUtil, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn start(this: &CameraUtil) -> Result<js_sys::Promise, JsValue>;
}

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

/// Pull `multiHandLandmarks` out of a MediaPipe results object.
#[allow(deprecated)]
fn parse_hands(results: &JsValue) -> Vec<Vec<Landmark>> {
    let raw = match js_sys::Reflect::get(results, &JsValue::from_str("multiHandLandmarks")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return Vec::new(),
    };
    match raw.into_serde::<Vec<Vec<Landmark>>>() {
        Ok(hands) => hands,
        Err(e) => {
            log::warn!("[tracking] malformed landmarks: {}", e);
            Vec::new()
        }
    }
}

fn mark_unavailable(session: &Rc<RefCell<Session>>, reason: String) {
    log::warn!("[tracking] unavailable: {}", reason);
    session
        .borrow_mut()
        .set_tracking(TrackingStatus::Unavailable(reason));
}

fn create_hands(session: &Rc<RefCell<Session>>) -> anyhow::Result<Hands> {
    let locate = Closure::wrap(
        Box::new(|file: String| format!("{}{}", HANDS_CDN_BASE, file)) as Box<dyn Fn(String) -> String>,
    );
    let hands = Hands::new(&js_object(&[("locateFile", locate.as_ref().clone())]))
        .map_err(|e| anyhow::anyhow!("Hands constructor failed: {:?}", e))?;
    locate.forget();

    hands.set_options(&js_object(&[
        ("maxNumHands", JsValue::from(MAX_NUM_HANDS)),
        ("modelComplexity", JsValue::from(MODEL_COMPLEXITY)),
        ("minDetectionConfidence", JsValue::from(MIN_DETECTION_CONFIDENCE)),
        ("minTrackingConfidence", JsValue::from(MIN_TRACKING_CONFIDENCE)),
    ]));

    let session_cb = session.clone();
    let on_results = Closure::wrap(Box::new(move |results: JsValue| {
        let detected = parse_hands(&results);
        let mut s = session_cb.borrow_mut();
        s.set_tracking(TrackingStatus::Active);
        s.on_hand_results(&detected, Instant::now());
    }) as Box<dyn FnMut(JsValue)>);
    hands.on_results(on_results.as_ref().unchecked_ref());
    on_results.forget();

    Ok(hands)
}

/// Start camera capture feeding MediaPipe Hands, routing results into `session`.
///
/// Synchronous setup failures are returned; a rejected camera start is logged
/// and reported through the session's tracking status.
pub fn start(session: Rc<RefCell<Session>>, video: web::HtmlVideoElement) -> anyhow::Result<()> {
    let hands = create_hands(&session)?;

    let video_for_frame = video.clone();
    let on_frame = Closure::wrap(Box::new(move || -> JsValue {
        let input = js_object(&[("image", video_for_frame.clone().into())]);
        match hands.send(&input) {
            Ok(promise) => promise.into(),
            Err(e) => {
                log::debug!("[tracking] send failed: {:?}", e);
                js_sys::Promise::resolve(&JsValue::UNDEFINED).into()
            }
        }
    }) as Box<dyn FnMut() -> JsValue>);

    let camera = CameraUtil::new(
        &video,
        &js_object(&[
            ("onFrame", on_frame.as_ref().clone()),
            ("width", JsValue::from(CAPTURE_WIDTH)),
            ("height", JsValue::from(CAPTURE_HEIGHT)),
            ("facingMode", JsValue::from_str(CAPTURE_FACING_MODE)),
        ]),
    )
    .map_err(|e| anyhow::anyhow!("Camera constructor failed: {:?}", e))?;
    on_frame.forget();

    let started = camera
        .start()
        .map_err(|e| anyhow::anyhow!("camera start failed: {:?}", e))?;
    spawn_local(async move {
        if let Err(e) = JsFuture::from(started).await {
            mark_unavailable(&session, format!("camera: {:?}", e));
        }
    });
    log::info!(
        "[tracking] camera {}x{} requested",
        CAPTURE_WIDTH,
        CAPTURE_HEIGHT
    );
    Ok(())
}

/// Start tracking, degrading to `TrackingStatus::Unavailable` on failure.
pub fn start_or_degrade(session: Rc<RefCell<Session>>, video: Option<web::HtmlVideoElement>) {
    let Some(video) = video else {
        mark_unavailable(&session, "missing video element".to_string());
        return;
    };
    if let Err(e) = start(session.clone(), video) {
        mark_unavailable(&session, e.to_string());
    }
}
