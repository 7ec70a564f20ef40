use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Soft, overdamped follow used by the background grid.
    pub fn grid() -> Self {
        Self {
            stiffness: config::GRID_SPRING_STIFFNESS,
            damping: config::GRID_SPRING_DAMPING,
            mass: config::GRID_SPRING_MASS,
        }
    }
}

/// Damped spring pulling `position` toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

// Frame gaps are integrated in steps no longer than this
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
// A throttled background tab resumes from where it left off
const MAX_FRAME_SECS: f64 = 0.1;

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Semi-implicit Euler integration over `dt_secs`.
    pub fn step(&mut self, dt_secs: f64) {
        if !(dt_secs > 0.0) || self.config.mass <= 0.0 {
            return;
        }
        let dt_secs = dt_secs.min(MAX_FRAME_SECS);
        let steps = (dt_secs / MAX_STEP_SECS).ceil() as u32;
        let h = dt_secs / steps as f64;
        for _ in 0..steps {
            let force = -self.config.stiffness * (self.position - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
        }
    }

    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.position - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// Maps a pointer coordinate to a grid shift in
/// `[-GRID_MAX_OFFSET_PX, GRID_MAX_OFFSET_PX]`, zero at the viewport centre.
pub fn grid_offset(client: f64, extent: f64) -> f64 {
    let center = extent / 2.0;
    if !(center > 0.0) {
        return 0.0;
    }
    let max = config::GRID_MAX_OFFSET_PX;
    ((client - center) / center * max).clamp(-max, max)
}

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has scrolled far enough into view to be revealed.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * config::REVEAL_VIEWPORT_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_offset_is_zero_at_center_and_bounded() {
        assert_eq!(grid_offset(500.0, 1000.0), 0.0);
        assert_eq!(grid_offset(0.0, 1000.0), -20.0);
        assert_eq!(grid_offset(1000.0, 1000.0), 20.0);
        assert_eq!(grid_offset(750.0, 1000.0), 10.0);
        assert_eq!(grid_offset(5000.0, 1000.0), 20.0);
        assert_eq!(grid_offset(10.0, 0.0), 0.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::grid(), 0.0);
        spring.set_target(20.0);
        for _ in 0..300 {
            spring.step(1.0 / 60.0);
        }
        assert!((spring.position() - 20.0).abs() < 0.01, "{}", spring.position());
        assert!(spring.is_settled(0.01));
    }

    #[test]
    fn overdamped_grid_spring_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::grid(), 0.0);
        spring.set_target(20.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.position() <= 20.0 + 1e-6);
        }
    }

    #[test]
    fn long_frame_gap_matches_many_small_steps() {
        let mut once = Spring::new(SpringConfig::grid(), 0.0);
        let mut many = once;
        once.set_target(-15.0);
        many.set_target(-15.0);

        once.step(0.1);
        for _ in 0..12 {
            many.step(0.1 / 12.0);
        }
        assert!((once.position() - many.position()).abs() < 0.05);
    }

    #[test]
    fn non_positive_step_is_ignored() {
        let mut spring = Spring::new(SpringConfig::grid(), 3.0);
        spring.set_target(10.0);
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        assert_eq!(spring.position(), 3.0);
    }

    #[test]
    fn long_pause_stays_finite_and_keeps_settling() {
        let mut spring = Spring::new(SpringConfig::grid(), 0.0);
        spring.set_target(20.0);
        spring.step(60.0);
        assert!(spring.position().is_finite());
        assert!(spring.position() > 0.0 && spring.position() <= 20.0);

        for _ in 0..300 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled(0.01), "{}", spring.position());
    }

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(-50.0, 800.0));
        assert!(!should_reveal(760.0, 800.0));
    }
}
