use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use lustre_core::{
    ModeController, PageSpec, PlaybackSlot, SceneBridge, ScrollAnimator, SmoothScroll,
};

use crate::dom;
use crate::scroll::RegionLayout;
use crate::viewer::ViewerScene;

/// Everything the per-frame tick owns.
///
/// One instance per page, shared `Rc<RefCell<_>>`-style between the frame
/// loop and the event closures, the way the rest of the front-end wires
/// state around.
pub struct FrameContext {
    pub page: PageSpec,
    pub animator: ScrollAnimator,
    pub bridge: SceneBridge<ViewerScene>,
    pub mode: ModeController,
    pub smooth: SmoothScroll,
    pub layout: RegionLayout,

    /// Intro flight; scroll arms when it lands.
    pub intro_slot: PlaybackSlot,
    /// Mode transition flights (explore / inspect / exit). One slot: a new
    /// request supersedes whatever is still in the air.
    pub transition_slot: PlaybackSlot,

    /// Completion flags set from playback callbacks. A callback fires inside
    /// the slot tick while the context is borrowed, so it only flips a flag
    /// and the frame acts on it afterwards.
    pub intro_landed: Rc<Cell<bool>>,
    pub exit_landed: Rc<Cell<bool>>,

    pub scroll_armed: bool,
    pub night_mode: bool,
    pub last_instant: Instant,
    /// Scroll position of the previous scrub pass; identical input skips the
    /// pass so an idle page never re-triggers the renderer.
    pub last_scroll: Option<f32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_instant).as_secs_f32();
        self.last_instant = now;

        // region bounds are re-measured lazily after a resize, before any
        // scrub pass can read them
        if self.layout.is_stale() {
            if let Some((window, document)) = dom::window_document() {
                self.layout
                    .refresh(&window, &document, self.animator.regions_mut());
            }
            // fresh bounds mean the same scroll can map to new progress
            self.last_scroll = None;
        }

        // scroll glide, then the scrub pass
        let scroll_y = self.smooth.tick(dt);
        let scroll_active = self.scroll_armed && self.mode.scroll_bound();
        self.animator.set_enabled(scroll_active);
        if scroll_active && self.last_scroll != Some(scroll_y) {
            let bridge = &mut self.bridge;
            self.animator.advance(scroll_y, &mut |t, v| bridge.apply(t, v));
            self.last_scroll = Some(scroll_y);
        }

        // wall-clock flights land after the scrub so the most recently
        // started timeline owns contended fields
        {
            let bridge = &mut self.bridge;
            self.intro_slot.tick(now, &mut |t, v| bridge.apply(t, v));
        }
        {
            let bridge = &mut self.bridge;
            self.transition_slot.tick(now, &mut |t, v| bridge.apply(t, v));
        }

        if self.intro_landed.take() {
            self.on_intro_landed();
        }
        if self.exit_landed.take() {
            self.mode.exit_completed();
        }

        // all queued track updates are in; exactly one render trigger
        if self.bridge.take_dirty() {
            self.bridge.sink().viewer().set_dirty();
        }
    }

    fn on_intro_landed(&mut self) {
        log::info!("[intro] landed; arming scroll binding");
        self.scroll_armed = true;
        self.animator.set_pose(self.page.rest_pose());
        if let Some((window, document)) = dom::window_document() {
            dom::set_body_scroll_locked(&document, false);
            self.smooth.jump_to(dom::page_scroll_y(&window));
        }
        self.layout.invalidate();
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame`.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
