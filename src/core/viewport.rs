// Camera and surface sizing state kept in step with the browser window.

use super::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_PIXEL_RATIO,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub camera: Camera,
    width: u32,
    height: u32,
    pixel_ratio: f64,
    projection: Mat4,
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        let mut vp = Self {
            camera: Camera::default(),
            width: 0,
            height: 0,
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio),
            projection: Mat4::IDENTITY,
        };
        vp.resize(width, height);
        vp
    }

    /// Track a new CSS size: aspect, projection and surface size follow it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.camera.aspect = width as f32 / height.max(1) as f32;
        self.projection = self.camera.projection_matrix();
    }

    pub fn set_pixel_ratio(&mut self, device_pixel_ratio: f64) {
        self.pixel_ratio = clamp_pixel_ratio(device_pixel_ratio);
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Size in CSS pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the drawing buffer in device pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio) as u32;
        let h = (self.height as f64 * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }
}
