#![cfg(target_arch = "wasm32")]
use crate::core::{MeshData, ReadySignal, Stage, ViewerConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod captions;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Keep the canvas backing store and the camera aspect in step with the layout.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, stage: &Rc<RefCell<Stage>>) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    stage.borrow_mut().resize(w, h);
    let canvas_resize = canvas.clone();
    let stage_resize = stage.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        stage_resize.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Variant and model URL come from `data-variant` / `data-model` on the canvas.
fn config_from_canvas(canvas: &web::HtmlCanvasElement) -> ViewerConfig {
    let data = canvas.dataset();
    ViewerConfig::from_attributes(data.get("variant").as_deref(), data.get("model").as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("headset-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = config_from_canvas(&canvas);
    let model_url = config.model_url.clone();
    log::info!("[viewer] variant={} model={}", config.variant.as_str(), model_url);

    let stage = Rc::new(RefCell::new(Stage::new(config, 1.0)));
    wire_canvas_resize(&canvas, &stage);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        stage: stage.clone(),
    });
    events::wire_scroll(stage.clone(), document.clone());

    overlay::show_status(&document, "Loading model…");

    let gpu = Rc::new(RefCell::new(frame::init_gpu(&canvas).await));
    if gpu.borrow().is_none() {
        overlay::show_error(&document, "WebGPU is not available in this browser.");
    }
    let captions = Rc::new(RefCell::new(None));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage: stage.clone(),
        gpu: gpu.clone(),
        captions: captions.clone(),
        canvas: canvas.clone(),
        document: document.clone(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    // Everything that needs the model waits on this signal.
    let model_ready: ReadySignal<MeshData> = ReadySignal::new();
    {
        let stage = stage.clone();
        model_ready.subscribe(move |mesh| {
            let mut stage = stage.borrow_mut();
            stage.attach_model(mesh);
            if let Err(e) = stage.attach_path() {
                log::error!("[tour] path setup failed: {}", e);
            }
        });
    }
    {
        let gpu = gpu.clone();
        model_ready.subscribe(move |mesh| {
            if let Some(g) = gpu.borrow_mut().as_mut() {
                g.upload_mesh(mesh);
            }
        });
    }
    {
        let stage = stage.clone();
        let document = document.clone();
        model_ready.subscribe(move |_| {
            let dom = captions::CaptionDom::collect(&document);
            stage.borrow_mut().attach_captions(dom.len());
            log::info!("[captions] {} captions", dom.len());
            *captions.borrow_mut() = Some(dom);
            // Sync the playhead and caption triggers with the current scroll position.
            events::publish_scroll(&stage, &document);
        });
    }
    {
        let document = document.clone();
        let gpu = gpu.clone();
        model_ready.subscribe(move |_| {
            if gpu.borrow().is_some() {
                overlay::hide_status(&document);
            }
        });
    }

    match assets::load_model(&model_url).await {
        Ok(mesh) => {
            model_ready.fire(mesh);
        }
        Err(e) => {
            log::error!("[asset] {:?}", e);
            overlay::show_error(&document, "Could not load the 3D model.");
        }
    }
    Ok(())
}
