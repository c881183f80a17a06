/// Discrete session state. Exactly one mode is active at a time; transitions
/// come from UI events only, never from scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Idle,
    Exploring,
    Configuring,
}

/// UI events the controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeEvent {
    EnterExplore,
    OpenGemMenu,
    OpenMaterialMenu,
    Exit,
}

/// Which configurator menu asked for the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectMenu {
    Gems,
    Materials,
}

/// What the host should play in response to an accepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAction {
    /// Fly to the explore pose, then hand the camera to orbit controls.
    PlayExploreIntro,
    /// Reposition the camera for inspecting gems or materials.
    PlayInspect(InspectMenu),
    /// Fly back to the last scroll-derived pose.
    PlayExit,
}

/// Event-driven state machine gating the scroll binding.
///
/// Events that make no sense in the current mode are ignored; an extra
/// "exit" click is not an error. While a mode other than Idle is active the
/// scroll binding stays off, so the mode's playback timeline owns the camera
/// until it completes; scrolling resumes only once the exit flight lands.
#[derive(Debug)]
pub struct ModeController {
    mode: SessionMode,
    scroll_bound: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: SessionMode::Idle,
            scroll_bound: true,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Whether scroll input may drive the scrub timelines right now.
    pub fn scroll_bound(&self) -> bool {
        self.scroll_bound
    }

    pub fn on_event(&mut self, event: ModeEvent) -> Option<ModeAction> {
        use ModeAction::*;
        use ModeEvent::*;
        use SessionMode::*;

        let (next, action) = match (self.mode, event) {
            (Idle, EnterExplore) => (Exploring, PlayExploreIntro),
            (Exploring | Configuring, OpenGemMenu) => (Configuring, PlayInspect(InspectMenu::Gems)),
            (Exploring | Configuring, OpenMaterialMenu) => {
                (Configuring, PlayInspect(InspectMenu::Materials))
            }
            (Exploring | Configuring, Exit) => (Idle, PlayExit),
            _ => return None,
        };
        log::info!("[mode] {:?} -> {:?} on {:?}", self.mode, next, event);
        self.mode = next;
        if next != Idle {
            self.scroll_bound = false;
        }
        Some(action)
    }

    /// Called when the exit flight completes; only then does scroll input own
    /// the camera again.
    pub fn exit_completed(&mut self) {
        if self.mode == SessionMode::Idle {
            self.scroll_bound = true;
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
