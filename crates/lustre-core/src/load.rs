/// Importer progress distilled to what the loading bar needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Done,
    Failed,
}

/// Tracks one sequential asset load.
///
/// The bar either reaches 100% or lands in an explicit failed state; it is
/// never left frozen mid-way with no verdict.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    phase: LoadPhase,
    loaded: f64,
    total: f64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(&mut self) {
        self.phase = LoadPhase::Loading;
        self.loaded = 0.0;
        self.total = 0.0;
    }

    pub fn on_progress(&mut self, loaded: f64, total: f64) {
        self.phase = LoadPhase::Loading;
        self.loaded = loaded;
        self.total = total;
    }

    pub fn on_load(&mut self) {
        self.phase = LoadPhase::Done;
    }

    pub fn on_error(&mut self, reason: &str) {
        log::error!("[loader] {}", reason);
        self.phase = LoadPhase::Failed;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoadPhase::Done
    }

    pub fn is_failed(&self) -> bool {
        self.phase == LoadPhase::Failed
    }

    /// Loading-bar width fraction in [0,1]. Done and Failed both pin to 1.0;
    /// the failed state is styled, not frozen.
    pub fn bar_scale(&self) -> f32 {
        match self.phase {
            LoadPhase::Idle => 0.0,
            LoadPhase::Loading => {
                if self.total > 0.0 {
                    (self.loaded / self.total).clamp(0.0, 1.0) as f32
                } else {
                    0.0
                }
            }
            LoadPhase::Done | LoadPhase::Failed => 1.0,
        }
    }
}
