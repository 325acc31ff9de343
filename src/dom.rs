use crate::core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels.
pub fn window_inner_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w.max(1.0) as u32, h.max(1.0) as u32)
}

/// Match the canvas CSS size to the viewport and its backing store to the
/// viewport's device-pixel size.
pub fn apply_viewport(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (css_w, css_h) = viewport.surface_size();
    let (px_w, px_h) = viewport.backing_size();
    canvas.set_width(px_w);
    canvas.set_height(px_h);
    _ = canvas.set_attribute(
        "style",
        &format!("width:{}px;height:{}px;display:block", css_w, css_h),
    );
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
