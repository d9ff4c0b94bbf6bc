//! Hand landmark frames as delivered by the detection model, and the
//! latest-value slot the render loop reads from.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Landmark index of the wrist in the 21-point hand model.
pub const WRIST: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Left" | "left" => Some(Self::Left),
            "Right" | "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Horizontal sign used when mapping the wrist into the scene.
    pub fn mirror_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// One detected hand: normalized landmark points plus an optional label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackedHand {
    pub landmarks: SmallVec<[Vec3; 21]>,
    pub handedness: Option<Handedness>,
}

impl TrackedHand {
    pub fn new(landmarks: impl IntoIterator<Item = Vec3>, handedness: Option<Handedness>) -> Self {
        Self {
            landmarks: landmarks.into_iter().collect(),
            handedness,
        }
    }

    pub fn wrist(&self) -> Option<Vec3> {
        self.landmarks.get(WRIST).copied()
    }
}

/// Everything the model produced for one video frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub hands: SmallVec<[TrackedHand; 2]>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(hand: TrackedHand) -> Self {
        let mut hands = SmallVec::new();
        hands.push(hand);
        Self { hands }
    }

    pub fn primary(&self) -> Option<&TrackedHand> {
        self.hands.first()
    }

    /// A hand counts as visible when the primary slot has at least one point.
    pub fn is_primary_visible(&self) -> bool {
        self.primary().is_some_and(|h| !h.landmarks.is_empty())
    }

    pub fn primary_landmark(&self, index: usize) -> Option<Vec3> {
        self.primary().and_then(|h| h.landmarks.get(index).copied())
    }
}

/// Latest detection result. The detection callback overwrites it whenever a
/// result is ready; the frame loop only ever reads the newest value.
#[derive(Clone, Debug, Default)]
pub struct LatestDetection {
    frame: HandFrame,
    handedness: Option<Handedness>,
    results: u64,
}

impl LatestDetection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored frame. A result without a handedness label keeps
    /// the last label seen.
    pub fn publish(&mut self, frame: HandFrame) {
        if let Some(label) = frame.primary().and_then(|h| h.handedness) {
            if self.handedness != Some(label) {
                log::debug!("primary hand is now {label:?}");
            }
            self.handedness = Some(label);
        }
        self.frame = frame;
        self.results += 1;
    }

    pub fn frame(&self) -> &HandFrame {
        &self.frame
    }

    pub fn handedness(&self) -> Option<Handedness> {
        self.handedness
    }

    /// Number of results published so far.
    pub fn results(&self) -> u64 {
        self.results
    }

    pub fn visible(&self) -> bool {
        self.frame.is_primary_visible()
    }

    /// World-space anchor of the primary wrist, if a hand is in view.
    pub fn wrist_anchor(&self, viewport: Vec2) -> Option<Vec3> {
        let wrist = self.frame.primary_landmark(WRIST)?;
        let side = self.handedness.map_or(-1.0, Handedness::mirror_sign);
        Some(hand_anchor_world(
            wrist,
            side,
            crate::constants::HAND_DEPTH_SCALE,
            viewport,
        ))
    }
}

/// Map a normalized landmark into the scene.
///
/// `viewport` is the camera's visible width and height at the focal plane.
/// The image is mirrored horizontally so the marker follows the user.
pub fn hand_anchor_world(point: Vec3, side: f32, depth: f32, viewport: Vec2) -> Vec3 {
    Vec3::new(
        (0.5 - point.x) * viewport.x * side,
        (0.5 - point.y) * viewport.y,
        -point.z * viewport.x * depth,
    )
}
