use glam::{Vec2, vec2};

use crate::sim::Vehicle;

/// Field-of-view factor: length of the camera plane relative to `dir`.
pub const DEFAULT_FOV: f32 = 0.66;

/// Floor-casting view-point.
///
/// * `pos` is in texture space: one world unit = one texture repeat.
/// * `plane` is always perpendicular to `dir`; its length is half the
///   horizontal field of view.
/// * `height` is the eye height above the floor plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    dir: Vec2,
    plane: Vec2,
    pub height: f32,
}

impl Camera {
    /// Camera at `pos` looking along `dir`, plane derived as `perp(dir) * fov`.
    pub fn new(pos: Vec2, dir: Vec2, fov: f32, height: f32) -> Self {
        Self {
            pos,
            dir,
            plane: dir.perp() * fov,
            height,
        }
    }

    /// Start-of-race view: looking down +Y with the default field of view.
    pub fn looking_north(pos: Vec2, height: f32) -> Self {
        Self::new(pos, vec2(0.0, 1.0), DEFAULT_FOV, height)
    }

    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    #[inline]
    pub fn plane(&self) -> Vec2 {
        self.plane
    }

    /// Direction of the ray through the leftmost screen column.
    #[inline]
    pub fn ray_left(&self) -> Vec2 {
        self.dir - self.plane
    }

    /// Direction of the ray through the rightmost screen column.
    #[inline]
    pub fn ray_right(&self) -> Vec2 {
        self.dir + self.plane
    }

    /// Track the vehicle. Only position and eye height follow it; the
    /// heading stays where it was set.
    pub fn follow(&mut self, vehicle: &Vehicle) {
        self.pos = vehicle.pos;
        self.height = vehicle.height;
    }

    /// Turn by `angle` radians (counter-clockwise). `dir` and `plane` rotate
    /// together so they stay perpendicular.
    pub fn rotate(&mut self, angle: f32) {
        let r = Vec2::from_angle(angle);
        self.dir = r.rotate(self.dir);
        self.plane = r.rotate(self.plane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn plane_is_perpendicular_and_scaled() {
        let cam = Camera::looking_north(Vec2::ZERO, 0.14);
        assert_eq!(cam.plane(), vec2(-DEFAULT_FOV, 0.0));
        assert!(cam.dir().dot(cam.plane()).abs() < 1e-6);
        assert_eq!(cam.ray_left(), vec2(DEFAULT_FOV, 1.0));
        assert_eq!(cam.ray_right(), vec2(-DEFAULT_FOV, 1.0));
    }

    #[test]
    fn rotate_keeps_plane_perpendicular() {
        let mut cam = Camera::looking_north(Vec2::ZERO, 0.14);
        cam.rotate(0.7);
        assert!(cam.dir().dot(cam.plane()).abs() < 1e-5);
        assert!((cam.plane().length() - DEFAULT_FOV).abs() < 1e-5);

        let mut cam = Camera::looking_north(Vec2::ZERO, 0.14);
        cam.rotate(FRAC_PI_2);
        assert!((cam.dir() - vec2(-1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn follow_keeps_heading() {
        let mut cam = Camera::looking_north(Vec2::ZERO, 1.0);
        let mut bus = Vehicle::default();
        bus.pos = vec2(3.0, -2.0);
        bus.vel = vec2(5.0, 1.0);
        cam.follow(&bus);
        assert_eq!(cam.pos, vec2(3.0, -2.0));
        assert_eq!(cam.height, bus.height);
        assert_eq!(cam.dir(), vec2(0.0, 1.0));
    }
}
