use crate::error::AnimError;

/// A scroll span tied to a page anchor, resolved to normalized progress.
///
/// Offsets are absolute page-scroll pixels. They derive from live DOM layout,
/// so the web layer re-measures them after a resize via [`set_bounds`]; the
/// resolver itself is pure and monotonic in `scroll_y`.
///
/// [`set_bounds`]: TriggerRegion::set_bounds
#[derive(Clone, Debug)]
pub struct TriggerRegion {
    anchor: &'static str,
    start_offset: f32,
    end_offset: f32,
    scrub: bool,
}

impl TriggerRegion {
    pub fn new(
        anchor: &'static str,
        start_offset: f32,
        end_offset: f32,
    ) -> Result<Self, AnimError> {
        if start_offset >= end_offset {
            return Err(AnimError::BadRegion {
                anchor,
                start: start_offset,
                end: end_offset,
            });
        }
        Ok(Self {
            anchor,
            start_offset,
            end_offset,
            scrub: true,
        })
    }

    /// CSS selector of the DOM element the span is measured from.
    pub fn anchor(&self) -> &'static str {
        self.anchor
    }

    /// Regions scrub by default; a non-scrub region toggles between its end
    /// states once the span is entered instead of tracking scroll through it.
    pub fn with_scrub(mut self, scrub: bool) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn scrub(&self) -> bool {
        self.scrub
    }

    /// Progress of `scroll_y` through the span, clamped to [0,1].
    pub fn progress(&self, scroll_y: f32) -> f32 {
        ((scroll_y - self.start_offset) / (self.end_offset - self.start_offset)).clamp(0.0, 1.0)
    }

    /// Replace the measured bounds after a layout change. Re-validated the
    /// same way as at construction.
    pub fn set_bounds(&mut self, start_offset: f32, end_offset: f32) -> Result<(), AnimError> {
        if start_offset >= end_offset {
            return Err(AnimError::BadRegion {
                anchor: self.anchor,
                start: start_offset,
                end: end_offset,
            });
        }
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        Ok(())
    }
}
