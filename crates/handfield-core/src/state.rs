//! Camera rig shared by the front-ends.
//!
//! Free of platform APIs so both the canvas renderer and the headless driver
//! can project scene points and size the hand anchor mapping from it.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION};
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera looking at the origin.
    pub fn rig(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn focal_distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Visible width and height of the plane `distance` units in front of
    /// the camera.
    pub fn viewport_at_distance(&self, distance: f32) -> Vec2 {
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        Vec2::new(height * self.aspect, height)
    }

    /// Visible extent at the target plane.
    pub fn viewport(&self) -> Vec2 {
        self.viewport_at_distance(self.focal_distance())
    }

    /// Project a world point to pixel coordinates on a `size` surface with
    /// the origin top-left. Points behind the camera yield `None`.
    pub fn project(&self, world: Vec3, size: Vec2) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * size.x,
            (1.0 - ndc.y) * 0.5 * size.y,
        ))
    }

    /// On-screen radius in pixels of a sphere of `radius` centred at `world`.
    pub fn projected_radius(&self, world: Vec3, radius: f32, surface_height: f32) -> Option<f32> {
        let depth = -(self.view_matrix() * world.extend(1.0)).z;
        if depth <= f32::EPSILON {
            return None;
        }
        let focal = 0.5 * surface_height / (self.fovy_radians * 0.5).tan();
        Some(radius * focal / depth)
    }
}
