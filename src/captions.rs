use crate::constants::CAPTION_SELECTOR;
use crate::core::CaptionStyle;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Caption elements and the style last written to each.
pub struct CaptionDom {
    texts: Vec<web::HtmlElement>,
    applied: Vec<Option<CaptionStyle>>,
}

impl CaptionDom {
    pub fn collect(document: &web::Document) -> Self {
        let texts: Vec<web::HtmlElement> = dom::query_all(document, CAPTION_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let applied = vec![None; texts.len()];
        Self { texts, applied }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Write changed styles only; untouched captions keep their stylesheet values.
    pub fn apply(&mut self, styles: &[CaptionStyle]) {
        for ((el, applied), style) in self.texts.iter().zip(&mut self.applied).zip(styles) {
            if applied.as_ref() == Some(style) {
                continue;
            }
            let css = el.style();
            _ = css.set_property("opacity", &format!("{:.3}", style.opacity));
            _ = css.set_property("transform", &format!("translateY({:.1}px)", style.offset_y));
            *applied = Some(*style);
        }
    }
}
