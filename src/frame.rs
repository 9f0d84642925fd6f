use crate::captions::CaptionDom;
use crate::core::Stage;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (hidden tab, debugger) must not fast-forward tweens; the resume timer still sees wall time.
const MAX_FRAME_DT_SEC: f32 = 0.25;

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub gpu: Rc<RefCell<Option<render::GpuState<'a>>>>,
    pub captions: Rc<RefCell<Option<CaptionDom>>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_instant;
        let dt = elapsed.min(std::time::Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        // Stage first: resume timer, controller, playhead, captions.
        let mut stage = self.stage.borrow_mut();
        stage.advance(elapsed, dt);

        if let Some(captions) = self.captions.borrow_mut().as_mut() {
            captions.apply(stage.caption_styles());
        }
        if let Some(readouts) = stage.readouts() {
            overlay::write_readouts(&self.document, &readouts);
        }

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&stage.camera, stage.model()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
