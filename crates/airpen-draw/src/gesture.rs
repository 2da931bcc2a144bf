//! Hand input and gesture signals
//!
//! The tracking layer reports per-finger pinch strength and pinch state for
//! both hands each frame. This module reduces that to the three signals the
//! controller acts on: draw, color switch and clear.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::config::GestureSettings;

/// Tracked fingers (the thumb is the pinch partner, not a pinch target)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    fn slot(self) -> usize {
        match self {
            Finger::Index => 0,
            Finger::Middle => 1,
            Finger::Ring => 2,
            Finger::Pinky => 3,
        }
    }
}

/// Which hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Handedness {
    #[default]
    Left,
    Right,
}

/// Pinch state of one hand for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandState {
    /// Whether the tracking layer currently sees this hand
    pub tracked: bool,
    /// Pinch strength in [0, 1] per finger
    pub strength: [f32; 4],
    /// Tracker's own "is pinching" decision per finger
    pub pinching: [bool; 4],
}

impl HandState {
    /// A tracked hand with no pinches
    pub fn tracked() -> Self {
        Self {
            tracked: true,
            ..Default::default()
        }
    }

    pub fn with_strength(mut self, finger: Finger, strength: f32) -> Self {
        self.strength[finger.slot()] = strength;
        self
    }

    pub fn with_pinching(mut self, finger: Finger, pinching: bool) -> Self {
        self.pinching[finger.slot()] = pinching;
        self
    }

    /// Pinch strength of a finger, zero when the hand is not tracked
    pub fn pinch_strength(&self, finger: Finger) -> f32 {
        if self.tracked {
            self.strength[finger.slot()]
        } else {
            0.0
        }
    }

    pub fn is_pinching(&self, finger: Finger) -> bool {
        self.tracked && self.pinching[finger.slot()]
    }

    /// All four fingers pinch harder than `threshold`
    pub fn is_fist(&self, threshold: f32) -> bool {
        Finger::ALL
            .iter()
            .all(|&finger| self.pinch_strength(finger) > threshold)
    }
}

/// Everything the controller consumes for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Current pen tip position
    pub tip: Point,
    pub left: HandState,
    pub right: HandState,
}

impl FrameInput {
    pub fn hand(&self, handedness: Handedness) -> &HandState {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }
}

/// Signals derived from a frame's hand state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureSignals {
    /// Drawing hand's index pinch exceeds the draw threshold
    pub draw: bool,
    /// Level of the color-switch pinch (edge detection happens downstream)
    pub color_switch: bool,
    /// Either hand is making a fist
    pub clear: bool,
}

impl GestureSignals {
    pub fn from_input(input: &FrameInput, draw_hand: Handedness, settings: &GestureSettings) -> Self {
        let hand = input.hand(draw_hand);
        Self {
            draw: hand.pinch_strength(Finger::Index) > settings.draw_threshold,
            color_switch: hand.is_pinching(Finger::Middle),
            clear: input.left.is_fist(settings.clear_threshold)
                || input.right.is_fist(settings.clear_threshold),
        }
    }
}

/// Rising-edge detector for a boolean level
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// True only on the frame the level goes from false to true
    pub fn rising(&mut self, level: bool) -> bool {
        let rose = level && !self.previous;
        self.previous = level;
        rose
    }
}
