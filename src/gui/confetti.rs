use crate::input::Viewport;
use cairo::Context;
use palette::{FromColor, Hsv, Srgb};
use rand::Rng;
use std::f64::consts::PI;

/// Animation tick period while the effect is active.
pub const TICK_INTERVAL_MS: u64 = 16;

const GRAVITY: f64 = 320.0; // px/s^2
const DRAG: f64 = 0.35;
const FLAKE_WIDTH: f64 = 10.0;
const FLAKE_HEIGHT: f64 = 6.0;

/// One falling confetti flake. Spawned above the viewport, pulled down by
/// gravity, spinning as it goes.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle: f64,
    pub spin: f64,
    pub color: Srgb<f64>,
}

impl Particle {
    fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let hue = rng.random_range(0.0..360.0);
        Self {
            x: rng.random_range(0.0..viewport.width.max(1.0)),
            y: rng.random_range(-viewport.height.max(1.0) * 0.5..0.0),
            vx: rng.random_range(-40.0..40.0),
            vy: rng.random_range(20.0..120.0),
            angle: rng.random_range(0.0..2.0 * PI),
            spin: rng.random_range(-6.0..6.0),
            color: Srgb::from_color(Hsv::new(hue, 0.85, 0.95)),
        }
    }

    fn step(&mut self, dt: f64) {
        self.vy += GRAVITY * dt;
        self.vx -= self.vx * DRAG * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.angle += self.spin * dt;
    }
}

/// The full-viewport celebratory effect. Pure state; the surface owns the
/// tick that drives it.
pub struct ConfettiState {
    particles: Vec<Particle>,
}

impl ConfettiState {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Replaces any previous flakes with a fresh burst above the viewport.
    pub fn burst(&mut self, viewport: Viewport, count: usize, rng: &mut impl Rng) {
        self.particles = (0..count).map(|_| Particle::spawn(viewport, rng)).collect();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advances every flake by `dt` seconds and drops the ones that have
    /// fallen past the bottom edge.
    pub fn step(&mut self, dt: f64, viewport: Viewport) {
        for p in &mut self.particles {
            p.step(dt);
        }
        self.particles
            .retain(|p| p.y < viewport.height + FLAKE_HEIGHT);
    }

    pub fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        for p in &self.particles {
            let (r, g, b) = p.color.into_components();
            cr.save()?;
            cr.translate(p.x, p.y);
            cr.rotate(p.angle);
            cr.set_source_rgb(r, g, b);
            cr.rectangle(
                -FLAKE_WIDTH / 2.0,
                -FLAKE_HEIGHT / 2.0,
                FLAKE_WIDTH,
                FLAKE_HEIGHT,
            );
            cr.fill()?;
            cr.restore()?;
        }
        Ok(())
    }
}

impl Default for ConfettiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_burst_spawns_above_viewport() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut confetti = ConfettiState::new();
        confetti.burst(VIEWPORT, 150, &mut rng);
        assert_eq!(confetti.len(), 150);
        assert!(confetti.particles.iter().all(|p| p.y < 0.0));
        assert!(
            confetti
                .particles
                .iter()
                .all(|p| (0.0..=800.0).contains(&p.x))
        );
    }

    #[test]
    fn test_step_pulls_flakes_down() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut confetti = ConfettiState::new();
        confetti.burst(VIEWPORT, 50, &mut rng);
        let before: Vec<f64> = confetti.particles.iter().map(|p| p.y).collect();
        confetti.step(0.5, VIEWPORT);
        for (p, y0) in confetti.particles.iter().zip(before) {
            assert!(p.y > y0);
        }
    }

    #[test]
    fn test_fallen_flakes_are_dropped() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut confetti = ConfettiState::new();
        confetti.burst(VIEWPORT, 50, &mut rng);
        // Plenty of time for every flake to clear the bottom edge.
        for _ in 0..600 {
            confetti.step(0.1, VIEWPORT);
        }
        assert!(confetti.is_empty());
    }

    #[test]
    fn test_reburst_replaces_flakes() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut confetti = ConfettiState::new();
        confetti.burst(VIEWPORT, 10, &mut rng);
        confetti.burst(VIEWPORT, 25, &mut rng);
        assert_eq!(confetti.len(), 25);
    }
}
