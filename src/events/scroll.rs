use crate::constants::{SCROLL_CONTAINER_ID, SECTION_SELECTOR};
use crate::core::{scroll_progress, SectionRect, Stage};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the scroll container and section geometry and hand it to the stage.
pub fn publish_scroll(stage: &Rc<RefCell<Stage>>, document: &web::Document) {
    let viewport_h = dom::viewport_height();
    let container = document
        .get_element_by_id(SCROLL_CONTAINER_ID)
        .or_else(|| document.document_element());
    let Some(container) = container else {
        return;
    };
    let rect = container.get_bounding_client_rect();
    let progress = scroll_progress(rect.top() as f32, rect.height() as f32, viewport_h);

    let sections: Vec<SectionRect> = dom::query_all(document, SECTION_SELECTOR)
        .iter()
        .map(|el| {
            let r = el.get_bounding_client_rect();
            SectionRect {
                top: r.top() as f32,
                bottom: r.bottom() as f32,
            }
        })
        .collect();

    stage.borrow_mut().scroll_to(progress, &sections, viewport_h);
}

pub fn wire_scroll(stage: Rc<RefCell<Stage>>, document: web::Document) {
    let closure = Closure::wrap(Box::new(move || {
        publish_scroll(&stage, &document);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
