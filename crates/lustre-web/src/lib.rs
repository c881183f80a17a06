#![cfg(target_arch = "wasm32")]
//! WASM front-end: binds the scroll-bound scene animator to the page and the
//! external viewer. Setup is fail-fast: a missing canvas, a failed model
//! load or a missing scene object aborts init and surfaces the loader's
//! failed state instead of leaving a half-wired page.

mod audio;
mod dom;
mod events;
mod frame;
mod scroll;
mod viewer;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use lustre_core::{
    AnimError, LoadTracker, ModeController, ModelVariant, PageSpec, Playback, PlaybackSlot,
    SceneBridge, SceneTarget, ScrollAnimator, SmoothScroll, TrackValue, DAY_BACKGROUND,
    RING_OBJECT, SCROLL_SMOOTH_RATE_PER_SEC,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lustre-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some((_, document)) = dom::window_document() {
                dom::set_loader_failed(&document);
            }
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
        .get_element_by_id("webgi-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #webgi-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // no page scrolling until the intro lands
    dom::set_body_scroll_locked(&document, true);

    let is_mobile = viewer::ShowcaseViewer::is_mobile_device();
    let display_scaling = window.device_pixel_ratio().min(1.0);
    let viewer = viewer::create(&canvas, is_mobile, display_scaling).await?;
    viewer.set_background(DAY_BACKGROUND);

    let load = Rc::new(RefCell::new(LoadTracker::new()));
    wire_import_events(&viewer, &load);

    let page = PageSpec::new(ModelVariant::Classic, is_mobile);

    // strictly sequential: nothing looks up objects until the load resolves
    wasm_bindgen_futures::JsFuture::from(viewer.load_model(page.model().asset_path))
        .await
        .map_err(|e| AnimError::Load(format!("{:?}", e)))?;
    if load.borrow().is_failed() {
        return Err(AnimError::Load("importer reported failure".into()).into());
    }

    let mut scene = viewer::ViewerScene::new(viewer.clone());
    scene.rebind(page.model())?;

    let mut bridge = SceneBridge::new(scene);
    bridge.apply(
        SceneTarget::ObjectRotation(RING_OBJECT),
        TrackValue::Vector(glam::Vec3::from_array(page.model().rest_rotation)),
    );

    let animator = ScrollAnimator::new(page.scroll_bindings()?, page.rest_pose());

    window.scroll_to_with_x_and_y(0.0, 0.0);
    dom::set_loader_hidden(&document, true);

    let intro_landed = Rc::new(Cell::new(false));
    let exit_landed = Rc::new(Cell::new(false));

    let mut intro_slot = PlaybackSlot::new();
    {
        let landed = intro_landed.clone();
        intro_slot.play(
            Playback::new(page.intro_timeline()?, Instant::now())
                .with_completion(move || landed.set(true)),
        );
    }

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        animator,
        bridge,
        mode: ModeController::new(),
        smooth: SmoothScroll::new(SCROLL_SMOOTH_RATE_PER_SEC),
        layout: scroll::RegionLayout::new(),
        intro_slot,
        transition_slot: PlaybackSlot::new(),
        intro_landed,
        exit_landed,
        scroll_armed: false,
        night_mode: false,
        last_instant: Instant::now(),
        last_scroll: None,
    }));

    let music = Rc::new(audio::MusicToggle::new());
    events::wire_ui(ctx.clone(), music);
    frame::start_loop(ctx);
    Ok(())
}

/// Importer events drive the loading bar. The bar completes or lands in the
/// explicit failed state; it never freezes mid-way.
fn wire_import_events(viewer: &viewer::ShowcaseViewer, load: &Rc<RefCell<LoadTracker>>) {
    {
        let load = load.clone();
        let closure = Closure::wrap(Box::new(move || {
            load.borrow_mut().on_start();
            if let Some((_, document)) = dom::window_document() {
                dom::set_loader_progress(&document, 0.0);
            }
        }) as Box<dyn FnMut()>);
        viewer.on_import_start(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let load = load.clone();
        let closure = Closure::wrap(Box::new(move |loaded: f64, total: f64| {
            let mut tracker = load.borrow_mut();
            tracker.on_progress(loaded, total);
            if let Some((_, document)) = dom::window_document() {
                dom::set_loader_progress(&document, tracker.bar_scale());
            }
        }) as Box<dyn FnMut(f64, f64)>);
        viewer.on_import_progress(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let load = load.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut tracker = load.borrow_mut();
            tracker.on_load();
            if let Some((_, document)) = dom::window_document() {
                dom::set_loader_progress(&document, tracker.bar_scale());
            }
        }) as Box<dyn FnMut()>);
        viewer.on_import_load(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let load = load.clone();
        let closure = Closure::wrap(Box::new(move |message: String| {
            load.borrow_mut().on_error(&message);
            if let Some((_, document)) = dom::window_document() {
                dom::set_loader_failed(&document);
            }
        }) as Box<dyn FnMut(String)>);
        viewer.on_import_error(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
