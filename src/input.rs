use crate::core::DragKind;
use web_sys as web;

// Pointer button codes as reported by `PointerEvent.button`.
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_AUXILIARY: i16 = 1;
pub const BUTTON_SECONDARY: i16 = 2;

/// Wheel `deltaMode` values.
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

/// Gesture for a press: primary orbits (pans with a held modifier), middle dollies,
/// secondary pans. Other buttons start nothing.
#[inline]
pub fn drag_kind_for(button: i16, modifier: bool) -> Option<DragKind> {
    match button {
        BUTTON_PRIMARY if modifier => Some(DragKind::Pan),
        BUTTON_PRIMARY => Some(DragKind::Rotate),
        BUTTON_AUXILIARY => Some(DragKind::Dolly),
        BUTTON_SECONDARY => Some(DragKind::Pan),
        _ => None,
    }
}

/// Normalise a wheel delta to pixels so line- and page-mode devices dolly at a similar rate.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f64) -> f32 {
    let px = match delta_mode {
        DELTA_LINE => delta_y * 16.0,
        DELTA_PAGE => delta_y * page_height,
        _ => delta_y,
    };
    px as f32
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    [
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    ]
}
