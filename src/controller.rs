//! Interpolation scalar driven by pointer presence.

/// Default rate at which `tween` moves per second of elapsed time.
pub const DEFAULT_GAIN: f64 = 0.1;

/// Which way `tween` is currently heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Idle: ease back toward 1.
    #[default]
    Increasing,
    /// Touched: ease toward 0.
    Decreasing,
}

impl Direction {
    /// Apply one step to `tween`, keeping it inside `[0, 1]`.
    pub fn step(self, tween: f64, gain: f64, dt: f64) -> f64 {
        let amount = gain * dt;
        if !amount.is_finite() {
            return match self {
                Direction::Increasing if amount > 0.0 => 1.0,
                Direction::Decreasing if amount > 0.0 => 0.0,
                _ => tween,
            };
        }
        let amount = amount.max(0.0);
        match self {
            Direction::Increasing => (tween + amount).min(1.0),
            Direction::Decreasing => (tween - amount).max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationController {
    tween: f64,
    direction: Direction,
    gain: f64,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_GAIN)
    }
}

impl AnimationController {
    pub fn new(initial_tween: f64, gain: f64) -> Self {
        let tween = if initial_tween.is_nan() {
            1.0
        } else {
            initial_tween.clamp(0.0, 1.0)
        };
        Self {
            tween,
            direction: Direction::Increasing,
            gain,
        }
    }

    pub fn tween(&self) -> f64 {
        self.tween
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Step with the currently selected direction. `dt` is the time since
    /// the direction's reference point.
    pub fn step(&mut self, dt: f64) -> f64 {
        self.tween = self.direction.step(self.tween, self.gain, dt);
        self.tween
    }

    /// Resting lower bound reached.
    pub fn at_rest(&self) -> bool {
        self.tween == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_saturates_at_one() {
        let mut ctl = AnimationController::new(0.95, DEFAULT_GAIN);
        assert!((ctl.step(0.25) - 0.975).abs() < 1e-12);
        assert_eq!(ctl.step(10.0), 1.0);
    }

    #[test]
    fn decreasing_saturates_at_zero() {
        let mut ctl = AnimationController::default();
        ctl.set_direction(Direction::Decreasing);
        assert!((ctl.step(2.0) - 0.8).abs() < 1e-12);
        assert_eq!(ctl.step(100.0), 0.0);
        assert!(ctl.at_rest());
    }

    #[test]
    fn zero_dt_leaves_tween_alone() {
        let mut ctl = AnimationController::new(0.4, DEFAULT_GAIN);
        assert_eq!(ctl.step(0.0), 0.4);
        ctl.set_direction(Direction::Decreasing);
        assert_eq!(ctl.step(0.0), 0.4);
    }

    #[test]
    fn infinite_dt_clamps() {
        assert_eq!(Direction::Increasing.step(0.3, DEFAULT_GAIN, f64::INFINITY), 1.0);
        assert_eq!(Direction::Decreasing.step(0.3, DEFAULT_GAIN, f64::INFINITY), 0.0);
        assert_eq!(Direction::Decreasing.step(0.3, DEFAULT_GAIN, f64::NAN), 0.3);
    }

    #[test]
    fn initial_tween_is_clamped() {
        assert_eq!(AnimationController::new(4.0, DEFAULT_GAIN).tween(), 1.0);
        assert_eq!(AnimationController::new(-1.0, DEFAULT_GAIN).tween(), 0.0);
    }
}
