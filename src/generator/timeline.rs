use crate::foundation::error::{CatalystError, CatalystResult};

/// Fixed-rate animation clock. The duration is snapped to a whole number of frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    fps: f64,
    n_frames: u64,
    pub speed: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            fps: 30.0,
            n_frames: 300,
            speed: 1.0,
        }
    }
}

impl Timeline {
    pub fn new(fps: f64, duration_secs: f64, speed: f64) -> CatalystResult<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(CatalystError::validation(format!("fps must be > 0, got {fps}")));
        }
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(CatalystError::validation(format!(
                "duration must be > 0, got {duration_secs}"
            )));
        }
        if !speed.is_finite() {
            return Err(CatalystError::validation("speed must be finite"));
        }
        let n_frames = (duration_secs * fps).floor() as u64;
        if n_frames == 0 {
            return Err(CatalystError::validation(
                "duration is shorter than a single frame",
            ));
        }
        Ok(Self {
            fps,
            n_frames,
            speed,
        })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn n_frames(&self) -> u64 {
        self.n_frames
    }

    pub fn duration_secs(&self) -> f64 {
        self.n_frames as f64 / self.fps
    }

    pub fn progress(&self, frame: u64) -> f64 {
        frame as f64 / self.n_frames as f64
    }

    /// Scene time in seconds, scaled by `speed`.
    pub fn time(&self, frame: u64) -> f64 {
        self.progress(frame) * self.duration_secs() * self.speed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generator/timeline.rs"]
mod tests;
