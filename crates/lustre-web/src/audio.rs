use std::cell::RefCell;

use lustre_core::MUSIC_VOLUME;
use web_sys as web;

const MUSIC_SRC: &str = "./assets/sounds/music_loop.mp3";

/// Background music behind the music-control buttons.
///
/// The element is created on first use so no audio loads before a gesture,
/// and entering explore mode starts it if it is not already playing.
pub struct MusicToggle {
    element: RefCell<Option<web::HtmlAudioElement>>,
    playing: std::cell::Cell<bool>,
}

impl MusicToggle {
    pub fn new() -> Self {
        Self {
            element: RefCell::new(None),
            playing: std::cell::Cell::new(false),
        }
    }

    fn element(&self) -> Option<web::HtmlAudioElement> {
        let mut slot = self.element.borrow_mut();
        if slot.is_none() {
            match web::HtmlAudioElement::new_with_src(MUSIC_SRC) {
                Ok(el) => {
                    el.set_loop(true);
                    el.set_volume(MUSIC_VOLUME);
                    *slot = Some(el);
                }
                Err(e) => {
                    log::error!("[music] audio element error: {:?}", e);
                    return None;
                }
            }
        }
        slot.clone()
    }

    pub fn toggle(&self) {
        if self.playing.get() {
            self.pause();
        } else {
            self.ensure_playing();
        }
    }

    pub fn ensure_playing(&self) {
        if self.playing.get() {
            return;
        }
        if let Some(el) = self.element() {
            let _ = el.play();
            self.playing.set(true);
        }
    }

    pub fn pause(&self) {
        if let Some(el) = self.element.borrow().clone() {
            el.pause().ok();
        }
        self.playing.set(false);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }
}

impl Default for MusicToggle {
    fn default() -> Self {
        Self::new()
    }
}
