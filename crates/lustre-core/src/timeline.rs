use instant::Instant;
use smallvec::SmallVec;

use crate::scene::SceneTarget;
use crate::track::{Track, TrackValue};

/// One track scheduled inside a timeline's virtual duration.
#[derive(Clone, Debug)]
struct Tween {
    target: SceneTarget,
    track: Track,
    start: f32,
    duration: f32,
}

/// Ordered set of tweens sharing one virtual-duration coordinate.
///
/// The virtual duration only orders entries relative to each other. In scrub
/// mode it is stretched over a scroll region; in playback mode it is read as
/// seconds. Offsets may be negative so an entry overlaps the one before it.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: SmallVec<[Tween; 8]>,
    total: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tween at the current end of the timeline.
    pub fn tween(self, target: SceneTarget, track: Track, duration: f32) -> Self {
        self.tween_offset(target, track, duration, 0.0)
    }

    /// Append with a start shift relative to the current end. A negative
    /// offset overlaps the previous entry; `-duration` starts both together.
    pub fn tween_offset(
        mut self,
        target: SceneTarget,
        track: Track,
        duration: f32,
        offset: f32,
    ) -> Self {
        let start = (self.total + offset).max(0.0);
        self.total = self.total.max(start + duration);
        self.tweens.push(Tween {
            target,
            track,
            start,
            duration,
        });
        self
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Scrub the timeline to `progress` in [0,1] of its virtual duration.
    ///
    /// Global progress is remapped into every tween's own window, clamped, and
    /// the sampled value emitted. Pure fan-out over immutable tracks: feeding
    /// the same progress twice emits identical values, which scroll resampling
    /// relies on.
    pub fn advance(&self, progress: f32, apply: &mut dyn FnMut(SceneTarget, TrackValue)) {
        if self.tweens.is_empty() {
            return;
        }
        let at = progress.clamp(0.0, 1.0) * self.total;
        for tw in &self.tweens {
            let local = if tw.duration <= 0.0 {
                if at >= tw.start {
                    1.0
                } else {
                    0.0
                }
            } else {
                ((at - tw.start) / tw.duration).clamp(0.0, 1.0)
            };
            apply(tw.target, tw.track.update(local));
        }
    }

    /// Mutable access to the tracks, used to flip override gates.
    pub fn tracks_mut(&mut self) -> impl Iterator<Item = &mut Track> {
        self.tweens.iter_mut().map(|tw| &mut tw.track)
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tweens.iter().map(|tw| &tw.track)
    }
}

/// Wall-clock playback of a timeline, for intro/explore/exit flights.
///
/// The timeline's virtual duration is read as seconds. Playback is monotonic,
/// runs once to completion, and fires its completion callback exactly once,
/// on the tick that first reaches the end.
pub struct Playback {
    timeline: Timeline,
    duration: f32,
    started: Instant,
    on_complete: Option<Box<dyn FnOnce()>>,
    finished: bool,
}

impl Playback {
    pub fn new(timeline: Timeline, now: Instant) -> Self {
        let duration = timeline.total();
        Self {
            timeline,
            duration,
            started: now,
            on_complete: None,
            finished: false,
        }
    }

    pub fn with_completion(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Advance to `now`. Returns true once the playback has finished.
    pub fn tick(&mut self, now: Instant, apply: &mut dyn FnMut(SceneTarget, TrackValue)) -> bool {
        if self.finished {
            return true;
        }
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).min(1.0)
        };
        self.timeline.advance(progress, apply);
        if progress >= 1.0 {
            self.finished = true;
            if let Some(cb) = self.on_complete.take() {
                cb();
            }
        }
        self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Holds at most one in-flight playback for a timeline slot.
///
/// Starting a new playback supersedes the old one mid-flight; the superseded
/// playback's completion callback never fires. Re-clicking "exit" while the
/// explore flight is still running is the motivating case.
#[derive(Default)]
pub struct PlaybackSlot {
    current: Option<Playback>,
}

impl PlaybackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, playback: Playback) {
        if let Some(old) = self.current.replace(playback) {
            if !old.is_finished() {
                log::info!("[timeline] superseding in-flight playback");
            }
        }
    }

    /// Tick the in-flight playback, if any; drops it once finished.
    pub fn tick(&mut self, now: Instant, apply: &mut dyn FnMut(SceneTarget, TrackValue)) {
        if let Some(pb) = &mut self.current {
            if pb.tick(now, apply) {
                self.current = None;
            }
        }
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}
