use lustre_core::TriggerRegion;
use web_sys as web;

/// Pixel span over which a section drives its timeline: the tween starts when
/// the section's top enters the viewport bottom and ends when it reaches the
/// viewport top.
#[inline]
pub fn region_bounds(element_top_abs: f32, viewport_height: f32) -> (f32, f32) {
    (element_top_abs - viewport_height, element_top_abs)
}

/// Staleness gate for region bounds.
///
/// Bounds derive from live DOM layout, so a resize invalidates them. The
/// re-measure is lazy: the frame loop calls [`refresh`] before the next scrub
/// pass, never trusting values cached across a resize.
///
/// [`refresh`]: RegionLayout::refresh
#[derive(Debug)]
pub struct RegionLayout {
    stale: bool,
}

impl RegionLayout {
    pub fn new() -> Self {
        Self { stale: true }
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Measure every region's anchor and install fresh pixel bounds.
    pub fn refresh<'a>(
        &mut self,
        window: &web::Window,
        document: &web::Document,
        regions: impl Iterator<Item = &'a mut TriggerRegion>,
    ) {
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
        for region in regions {
            match document.query_selector(region.anchor()) {
                Ok(Some(element)) => {
                    let top_abs = element.get_bounding_client_rect().top() as f32 + scroll_y;
                    let (start, end) = region_bounds(top_abs, viewport_height);
                    if let Err(e) = region.set_bounds(start, end) {
                        log::warn!("[scroll] {}", e);
                    }
                }
                _ => log::warn!("[scroll] missing anchor '{}'", region.anchor()),
            }
        }
        self.stale = false;
    }
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self::new()
    }
}
