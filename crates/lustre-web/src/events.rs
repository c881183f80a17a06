//! DOM event wiring for the configurator UI.
//!
//! Buttons feed [`ModeEvent`]s to the mode controller; swatches route color
//! picks into the override gates; everything else is chrome toggling.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use lustre_core::{
    InspectMenu, ModeAction, ModeEvent, PageSpec, Playback, ScenePose, SceneTarget, ScrollAnimator,
    Srgb, TrackValue, DAY_BACKGROUND, GEM_COLOR_TRACKS, GEM_MATERIAL, GEM_SWATCHES,
    GOLD_COLOR_TRACKS, GOLD_MATERIAL, METAL_PAIRS, NIGHT_BACKGROUND, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE, RING_OBJECT, SILVER_COLOR_TRACKS, SILVER_MATERIAL,
};

use crate::audio::MusicToggle;
use crate::dom;
use crate::frame::FrameContext;

const NIGHT_FILTER_TARGETS: &[&str] = &[
    ".header",
    ".cam-view-1",
    ".cam-view-2",
    ".cam-view-3",
    ".exit--container",
    ".footer--menu",
];

pub fn wire_ui(ctx: Rc<RefCell<FrameContext>>, music: Rc<MusicToggle>) {
    let Some((window, document)) = dom::window_document() else {
        return;
    };

    wire_scroll_sync(&window, &ctx);
    wire_section_shortcuts(&document);
    wire_mode_buttons(&document, &ctx, &music);
    wire_menu_close_buttons(&document, &ctx);
    wire_gem_swatches(&document, &ctx);
    wire_metal_swatches(&document, &ctx);
    wire_night_mode(&document, &ctx);
    wire_model_switcher(&document, &ctx);
    wire_music_controls(&document, &music);
}

fn wire_scroll_sync(window: &web::Window, ctx: &Rc<RefCell<FrameContext>>) {
    {
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                ctx.borrow_mut().smooth.set_target(dom::page_scroll_y(&w));
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        // a resize invalidates every measured region span
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            ctx.borrow_mut().layout.invalidate();
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_section_shortcuts(document: &web::Document) {
    for selector in [".button-scroll", ".forever", ".hero--scroller"] {
        dom::add_click_listener(document, selector, move || {
            if let Some((window, document)) = dom::window_document() {
                dom::scroll_to_section(&window, &document, ".cam-view-2");
            }
        });
    }
}

fn wire_mode_buttons(
    document: &web::Document,
    ctx: &Rc<RefCell<FrameContext>>,
    music: &Rc<MusicToggle>,
) {
    let pairs = [
        (".btn-customize", ModeEvent::EnterExplore),
        (".button--exit", ModeEvent::Exit),
        (".config--gem", ModeEvent::OpenGemMenu),
        (".config--material", ModeEvent::OpenMaterialMenu),
    ];
    for (selector, event) in pairs {
        let ctx = ctx.clone();
        let music = music.clone();
        dom::add_click_listener(document, selector, move || {
            handle_mode_event(&ctx, &music, event);
        });
    }
}

fn handle_mode_event(ctx: &Rc<RefCell<FrameContext>>, music: &Rc<MusicToggle>, event: ModeEvent) {
    let Some((_, document)) = dom::window_document() else {
        return;
    };
    let mut c = ctx.borrow_mut();
    let Some(action) = c.mode.on_event(event) else {
        // an event irrelevant to the current mode is a no-op
        return;
    };
    let now = Instant::now();
    let (position, target) = c.bridge.sink().camera_pose();

    match action {
        ModeAction::PlayExploreIntro => {
            let from = ScenePose {
                position,
                target,
                rotation: c.animator.last_pose().rotation,
            };
            match c.page.explore_timeline(from) {
                Ok(timeline) => {
                    let viewer = c.bridge.sink().viewer().clone();
                    let playback = Playback::new(timeline, now).with_completion(move || {
                        // hand the camera to free orbit inside the
                        // configurator envelope
                        viewer.set_orbit_controls(
                            true,
                            true,
                            ORBIT_MIN_DISTANCE,
                            ORBIT_MAX_DISTANCE,
                            false,
                        );
                    });
                    c.transition_slot.play(playback);
                }
                Err(e) => log::error!("[mode] explore timeline: {}", e),
            }
            dom::set_body_scroll_locked(&document, true);
            dom::set_style(&document, ".cam-view-3", "pointer-events: none");
            dom::set_style(&document, "#webgi-canvas", "pointer-events: all");
            dom::set_style(&document, "#webgi-canvas-container", "z-index: 1");
            dom::set_style(&document, ".side-bar", "display: none");
            dom::set_style(&document, ".footer--container", "display: flex");
            dom::set_style(&document, ".exit--container", "display: flex");
            music.ensure_playing();
        }
        ModeAction::PlayInspect(menu) => {
            let from = ScenePose {
                position,
                target,
                rotation: Vec3::from_array(c.page.model().explore_rotation),
            };
            match c.page.inspect_timeline(menu, from) {
                Ok(timeline) => c.transition_slot.play(Playback::new(timeline, now)),
                Err(e) => log::error!("[mode] inspect timeline: {}", e),
            }
            match menu {
                InspectMenu::Gems => {
                    dom::add_class(&document, ".gem--menu", "show");
                    dom::remove_class(&document, ".materials--menu", "show");
                    footer_item_active(&document, ".config--gem");
                }
                InspectMenu::Materials => {
                    dom::add_class(&document, ".materials--menu", "show");
                    dom::remove_class(&document, ".gem--menu", "show");
                    footer_item_active(&document, ".config--material");
                }
            }
        }
        ModeAction::PlayExit => {
            let from = ScenePose {
                position,
                target,
                rotation: Vec3::from_array(c.page.model().explore_rotation),
            };
            let to = c.animator.last_pose();
            match c.page.exit_timeline(from, to) {
                Ok(timeline) => {
                    let landed = c.exit_landed.clone();
                    let playback =
                        Playback::new(timeline, now).with_completion(move || landed.set(true));
                    c.transition_slot.play(playback);
                }
                Err(e) => {
                    // never leave scrolling wedged off over a bad timeline
                    log::error!("[mode] exit timeline: {}", e);
                    c.mode.exit_completed();
                }
            }
            c.bridge
                .sink()
                .viewer()
                .set_orbit_controls(false, false, 0.0, f32::INFINITY, true);
            dom::set_body_scroll_locked(&document, false);
            dom::set_style(&document, ".cam-view-3", "pointer-events: all");
            dom::set_style(&document, "#webgi-canvas", "pointer-events: none");
            dom::set_style(&document, "#webgi-canvas-container", "z-index: unset");
            dom::set_style(&document, ".side-bar", "display: block");
            dom::set_style(&document, ".footer--container", "display: none");
            dom::set_style(&document, ".exit--container", "display: none");
            dom::remove_class(&document, ".gem--menu", "show");
            dom::remove_class(&document, ".materials--menu", "show");
            clear_footer_active(&document);
        }
    }
}

fn wire_menu_close_buttons(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    {
        // closing the gem menu flies the camera back to the explore pose
        let ctx = ctx.clone();
        dom::add_click_listener(document, ".close-gems", move || {
            let Some((_, document)) = dom::window_document() else {
                return;
            };
            dom::remove_class(&document, ".gem--menu", "show");
            clear_footer_active(&document);
            let mut c = ctx.borrow_mut();
            let (position, target) = c.bridge.sink().camera_pose();
            let from = ScenePose {
                position,
                target,
                rotation: Vec3::from_array(c.page.model().explore_rotation),
            };
            match c.page.inspect_timeline(InspectMenu::Materials, from) {
                Ok(timeline) => c
                    .transition_slot
                    .play(Playback::new(timeline, Instant::now())),
                Err(e) => log::error!("[mode] close-gems timeline: {}", e),
            }
        });
    }
    dom::add_click_listener(document, ".close-materials", move || {
        if let Some((_, document)) = dom::window_document() {
            dom::remove_class(&document, ".materials--menu", "show");
            clear_footer_active(&document);
        }
    });
}

fn wire_gem_swatches(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    for (name, color) in GEM_SWATCHES {
        let ctx = ctx.clone();
        let selector = format!(".{}", name);
        dom::add_click_listener(document, &selector, move || {
            if let Some((_, document)) = dom::window_document() {
                dom::set_active_in_list(&document, ".colors--list", &format!(".{}", name));
            }
            apply_gem_color(&ctx, *color);
        });
    }
}

fn apply_gem_color(ctx: &Rc<RefCell<FrameContext>>, color: Srgb) {
    let mut c = ctx.borrow_mut();
    c.animator.override_colors(GEM_COLOR_TRACKS, color);
    c.bridge
        .apply(SceneTarget::MaterialColor(GEM_MATERIAL), TrackValue::Color(color));
}

fn wire_metal_swatches(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    for (name, silver, gold) in METAL_PAIRS {
        let ctx = ctx.clone();
        let selector = format!(".{}", name);
        dom::add_click_listener(document, &selector, move || {
            if let Some((_, document)) = dom::window_document() {
                dom::set_active_in_list(&document, ".materials--list", &format!(".{}", name));
            }
            let mut c = ctx.borrow_mut();
            c.animator.override_colors(SILVER_COLOR_TRACKS, *silver);
            c.animator.override_colors(GOLD_COLOR_TRACKS, *gold);
            c.bridge.apply(
                SceneTarget::MaterialColor(SILVER_MATERIAL),
                TrackValue::Color(*silver),
            );
            c.bridge.apply(
                SceneTarget::MaterialColor(GOLD_MATERIAL),
                TrackValue::Color(*gold),
            );
        });
    }
}

fn wire_night_mode(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    for selector in [".night--mode", ".night--mode--2"] {
        let ctx = ctx.clone();
        dom::add_click_listener(document, selector, move || {
            let Some((_, document)) = dom::window_document() else {
                return;
            };
            let mut c = ctx.borrow_mut();
            c.night_mode = !c.night_mode;
            let viewer = c.bridge.sink().viewer();
            viewer.set_background(if c.night_mode {
                NIGHT_BACKGROUND
            } else {
                DAY_BACKGROUND
            });
            viewer.set_dirty();
            for target in NIGHT_FILTER_TARGETS {
                if c.night_mode {
                    dom::add_class(&document, target, "night--mode--filter");
                } else {
                    dom::remove_class(&document, target, "night--mode--filter");
                }
            }
        });
    }
}

fn wire_model_switcher(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = ctx.clone();
    dom::add_click_listener(document, ".config--ring", move || {
        if let Some((_, document)) = dom::window_document() {
            clear_footer_active(&document);
        }
        let ctx = ctx.clone();
        spawn_local(async move {
            if let Err(e) = switch_model(&ctx).await {
                log::error!("[model] swap failed: {}", e);
                if let Some((_, document)) = dom::window_document() {
                    dom::set_loader_failed(&document);
                }
            }
        });
    });
}

/// Swap to the other ring model: unload, sequential load, re-resolve names,
/// rebuild the scroll bindings around the new variant's keyframes.
async fn switch_model(ctx: &Rc<RefCell<FrameContext>>) -> anyhow::Result<()> {
    let (viewer, next) = {
        let c = ctx.borrow();
        (c.bridge.sink().viewer().clone(), c.page.variant.other())
    };
    if let Some((_, document)) = dom::window_document() {
        dom::set_loader_hidden(&document, false);
    }
    viewer.unload_models();
    wasm_bindgen_futures::JsFuture::from(viewer.load_model(next.spec().asset_path))
        .await
        .map_err(|e| anyhow::anyhow!("model load rejected: {:?}", e))?;

    let mut c = ctx.borrow_mut();
    c.page = PageSpec::new(next, c.page.is_mobile);
    let model = c.page.model();
    // no lookups proceed on a half-populated scene; a missing name aborts here
    c.bridge.sink_mut().rebind(model)?;
    c.bridge.apply(
        SceneTarget::ObjectRotation(RING_OBJECT),
        TrackValue::Vector(Vec3::from_array(model.rest_rotation)),
    );
    let bindings = c.page.scroll_bindings()?;
    let pose = c.animator.last_pose();
    let enabled = c.animator.enabled();
    c.animator = ScrollAnimator::new(bindings, pose);
    c.animator.set_enabled(enabled);
    c.layout.invalidate();
    // the configurator keeps its free orbit on the new model
    c.bridge.sink().viewer().set_orbit_controls(
        true,
        true,
        ORBIT_MIN_DISTANCE,
        ORBIT_MAX_DISTANCE,
        false,
    );
    drop(c);
    if let Some((_, document)) = dom::window_document() {
        dom::set_loader_hidden(&document, true);
    }
    Ok(())
}

fn wire_music_controls(document: &web::Document, music: &Rc<MusicToggle>) {
    for selector in [".music--control", ".music--control--2"] {
        let music = music.clone();
        dom::add_click_listener(document, selector, move || {
            music.toggle();
        });
    }
}

fn footer_item_active(document: &web::Document, button_selector: &str) {
    clear_footer_active(document);
    if let Ok(Some(button)) = document.query_selector(button_selector) {
        if let Some(item) = button.parent_element() {
            let _ = item.class_list().add_1("active");
        }
    }
}

fn clear_footer_active(document: &web::Document) {
    if let Ok(Some(current)) = document.query_selector(".footer--menu li.active") {
        let _ = current.class_list().remove_1("active");
    }
}
