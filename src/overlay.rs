use crate::constants::STATUS_OVERLAY_ID;
use crate::core::readout::Readouts;
use web_sys as web;

#[inline]
pub fn show_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Visible fallback when the model cannot be shown.
pub fn show_error(document: &web::Document, text: &str) {
    show_status(document, text);
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("error");
    }
}

/// Write the inspection readouts. Missing elements are skipped.
pub fn write_readouts(document: &web::Document, readouts: &Readouts) {
    for (id, text) in readouts.entries() {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&text));
        }
    }
}
