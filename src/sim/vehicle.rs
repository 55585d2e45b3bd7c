//! Arcade kinematics for the bus.
//!
//! One explicit Euler step per rendered frame, no sub-stepping:
//!
//! 1. throttle pushes `vel.y` (forward speed),
//! 2. above a speed threshold the bus drifts sideways a little,
//! 3. steering adds a speed-coupled lateral push, bumps drag and swings
//!    the wheel toward its stop,
//! 4. velocity-proportional drag,
//! 5. `pos += vel * dt`.

use glam::{Vec2, vec2};

use super::controls::{Controls, Steer};

/// Tunable constants. Units are texture repeats and seconds; the values
/// are hand-tuned, not derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Forward acceleration while the throttle is held.
    pub accel: f32,
    /// Forward speed above which the lateral drift kicks in.
    pub drift_threshold: f32,
    /// Lateral acceleration applied above `drift_threshold`.
    pub drift_accel: f32,
    /// Lateral push per unit of forward speed while steering.
    pub steer_force: f32,
    /// Baseline drag coefficient.
    pub friction: f32,
    /// Drag multiplier while a steering key is held.
    pub turn_friction: f32,
    /// Rate (1/s) of the wheel's exponential approach to its target.
    pub steer_rate: f32,
    /// Wheel stop in degrees; left steers to `-limit`, right to `+limit`.
    pub steer_limit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: 2.0,
            drift_threshold: 0.5,
            drift_accel: 0.04,
            steer_force: 0.5,
            friction: 0.8,
            turn_friction: 1.5,
            steer_rate: 5.0,
            steer_limit: 40.0,
        }
    }
}

/// Eye height above the road at start-up.
pub const START_HEIGHT: f32 = 0.14;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vehicle {
    /// Texture-space position; unbounded.
    pub pos: Vec2,
    /// `x` = lateral speed, `y` = forward speed.
    pub vel: Vec2,
    /// Wheel angle in degrees, within `±steer_limit`.
    pub steer_angle: f32,
    /// Drag multiplier used by the last step.
    pub friction_mul: f32,
    /// Camera height above the floor.
    pub height: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            pos: vec2(0.5, 0.0),
            vel: Vec2::ZERO,
            steer_angle: 0.0,
            friction_mul: 1.0,
            height: START_HEIGHT,
        }
    }
}

/// `(1 - t) * a + t * b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

impl Vehicle {
    /// Advance by `dt` seconds. `dt == 0` leaves the state untouched.
    pub fn step(&mut self, controls: Controls, dt: f32, tuning: &Tuning) {
        if dt == 0.0 {
            return;
        }

        if controls.contains(Controls::FORWARD) {
            self.vel.y += tuning.accel * dt;
        }

        if self.vel.y > tuning.drift_threshold {
            self.vel.x += tuning.drift_accel * dt;
        }

        // weight clamped so a long frame lands on the target, never past it
        let t = (tuning.steer_rate * dt).clamp(0.0, 1.0);
        let (target, friction_mul) = match controls.steer() {
            Steer::Left => {
                self.vel.x += tuning.steer_force * dt * self.vel.y;
                (-tuning.steer_limit, tuning.turn_friction)
            }
            Steer::Right => {
                self.vel.x -= tuning.steer_force * dt * self.vel.y;
                (tuning.steer_limit, tuning.turn_friction)
            }
            Steer::Centre => (0.0, 1.0),
        };
        if t > 0.0 {
            self.steer_angle = lerp(self.steer_angle, target, t);
        }
        self.friction_mul = friction_mul;

        let drag = self.vel * (-tuning.friction * self.friction_mul);
        self.vel += drag * dt;

        self.pos += self.vel * dt;
    }
}
