use super::constants::{
    LANDMARK_INDEX_TIP, LANDMARK_MIDDLE_MCP, LANDMARK_THUMB_TIP, PINCH_COOLDOWN_MS,
    PINCH_THRESHOLD, SCALE_NEUTRAL_Y,
};
use instant::Instant;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// One tracked hand point in normalized image coordinates (`x`, `y` in 0..1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Distance in the image plane; depth is ignored.
    #[inline]
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Signals derived from one detection callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureUpdate {
    /// New scale target, `None` when no hand was seen.
    pub scale_target: Option<f32>,
    /// A debounced pinch was accepted on this callback.
    pub pinched: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackingStatus {
    Initializing,
    Active,
    Unavailable(String),
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingStatus::Initializing => f.write_str("Starting hand tracking…"),
            TrackingStatus::Active => f.write_str("Hand tracking active"),
            TrackingStatus::Unavailable(reason) => {
                write!(f, "Hand tracking unavailable ({reason})")
            }
        }
    }
}

#[inline]
pub fn scale_target_for(middle_mcp: &Landmark) -> f32 {
    1.0 + (SCALE_NEUTRAL_Y - middle_mcp.y)
}

#[inline]
pub fn is_pinch(thumb_tip: &Landmark, index_tip: &Landmark) -> bool {
    thumb_tip.planar_distance(index_tip) < PINCH_THRESHOLD
}

/// Turns raw hand landmarks into a scale target and debounced pinch events.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    last_pinch: Option<Instant>,
    cooldown: Duration,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self {
            last_pinch: None,
            cooldown: Duration::from_millis(PINCH_COOLDOWN_MS),
        }
    }
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_pinch(&self) -> Option<Instant> {
        self.last_pinch
    }

    /// Interpret one callback's detections. Only the first hand is used; with
    /// no usable hand nothing changes and a default update is returned.
    pub fn interpret(&mut self, hands: &[Vec<Landmark>], now: Instant) -> GestureUpdate {
        let Some(lm) = hands.first() else {
            return GestureUpdate::default();
        };
        if lm.len() <= LANDMARK_MIDDLE_MCP {
            log::debug!("[gesture] ignoring hand with {} landmarks", lm.len());
            return GestureUpdate::default();
        }

        let scale_target = scale_target_for(&lm[LANDMARK_MIDDLE_MCP]);
        let pinched = is_pinch(&lm[LANDMARK_THUMB_TIP], &lm[LANDMARK_INDEX_TIP])
            && self.accept_pinch(now);

        GestureUpdate {
            scale_target: Some(scale_target),
            pinched,
        }
    }

    fn accept_pinch(&mut self, now: Instant) -> bool {
        let cooled = match self.last_pinch {
            Some(last) => now >= last && now.duration_since(last) >= self.cooldown,
            None => true,
        };
        if cooled {
            self.last_pinch = Some(now);
        }
        cooled
    }
}
