use crate::constants::{HINT_ID, STATUS_ID};
use crate::core::{ShapeKind, TrackingStatus};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Show tracking state and the current target shape in the status line.
pub fn update_status(document: &web::Document, status: &TrackingStatus, shape: ShapeKind) {
    let text = format!("{} • Shape: {}", status, shape);
    dom::set_text(document, STATUS_ID, &text);
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        let cl = el.class_list();
        if matches!(status, TrackingStatus::Unavailable(_)) {
            _ = cl.add_1("warning");
        } else {
            _ = cl.remove_1("warning");
        }
    }
}
