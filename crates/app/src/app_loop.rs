use carver_core::Session;
use macroquad::prelude::KeyCode;

use crate::prefs_file::AppPrefs;

/// Multiplier the speed keys apply to the animation interval.
pub const SPEED_FACTOR: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Paused,
    Animating,
}

pub struct AppState {
    pub mode: AppMode,
    /// Seconds between animated carve steps.
    pub frame_interval: f32,
    pub show_progress: bool,
    /// Set for exactly one tick after F1; the main loop captures the frame
    /// after drawing it.
    pub screenshot_requested: bool,
    elapsed: f32,
}

impl AppState {
    pub fn from_prefs(prefs: &AppPrefs) -> Self {
        Self {
            mode: AppMode::Paused,
            frame_interval: prefs.frame_interval,
            show_progress: prefs.show_progress,
            screenshot_requested: false,
            elapsed: 0.0,
        }
    }

    /// Process one frame's input and animation budget.
    ///
    /// S steps once, A finishes the carve, P toggles animation, 1 and 2
    /// slow down and speed up, R resets the session, D toggles the progress
    /// overlay, F1 requests a screenshot. Stepping a complete session is a
    /// no-op, so a steady animation loop needs no completion special case.
    pub fn tick(&mut self, session: &mut Session, keys_pressed: &[KeyCode], frame_time: f32) {
        self.screenshot_requested = keys_pressed.contains(&KeyCode::F1);

        if keys_pressed.contains(&KeyCode::S) {
            session.step();
        }
        if keys_pressed.contains(&KeyCode::A) {
            session.run_to_completion();
        }
        if keys_pressed.contains(&KeyCode::P) {
            self.mode = match self.mode {
                AppMode::Paused => AppMode::Animating,
                AppMode::Animating => AppMode::Paused,
            };
            self.elapsed = 0.0;
        }
        if keys_pressed.contains(&KeyCode::Key1) {
            self.frame_interval *= SPEED_FACTOR;
        }
        if keys_pressed.contains(&KeyCode::Key2) {
            self.frame_interval /= SPEED_FACTOR;
        }
        if keys_pressed.contains(&KeyCode::R) {
            session.reset();
        }
        if keys_pressed.contains(&KeyCode::D) {
            self.show_progress = !self.show_progress;
        }

        if self.mode == AppMode::Animating {
            self.elapsed += frame_time;
            if self.elapsed > self.frame_interval {
                session.step();
                self.elapsed = 0.0;
            }
        }
    }

    /// Current preference snapshot, for change detection and persistence.
    pub fn prefs(&self) -> AppPrefs {
        AppPrefs {
            frame_interval: self.frame_interval,
            show_progress: self.show_progress,
            ..AppPrefs::default()
        }
    }
}
