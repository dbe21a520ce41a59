//! Decorative particle background.
//!
//! Fully isolated from application state: the field is stepped from the
//! frame delta and painted behind the page content, nothing more.

use egui::{Color32, Painter, Pos2, Stroke};
use rand::Rng;

pub(crate) const PARTICLE_COUNT: usize = 50;

/// Particles closer than this are joined by a line.
pub(crate) const LINK_DISTANCE: f32 = 100.0;

/// Drift speeds are tuned per 60 Hz frame.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    size: f32,
    speed_x: f32,
    speed_y: f32,
    opacity: f32,
}

pub(crate) struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                size: rng.gen_range(1.0..3.0),
                speed_x: rng.gen_range(-0.25..0.25),
                speed_y: rng.gen_range(-0.25..0.25),
                opacity: rng.gen_range(0.2..0.7),
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Advances every particle by one frame worth of drift, wrapping at the
    /// current edges. `dt` is the frame delta in seconds.
    pub(crate) fn step(&mut self, dt: f32, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        let scale = dt * REFERENCE_FPS;
        for particle in &mut self.particles {
            particle.x += particle.speed_x * scale;
            particle.y += particle.speed_y * scale;
            if particle.x > self.width {
                particle.x = 0.0;
            }
            if particle.x < 0.0 {
                particle.x = self.width;
            }
            if particle.y > self.height {
                particle.y = 0.0;
            }
            if particle.y < 0.0 {
                particle.y = self.height;
            }
        }
    }

    pub(crate) fn paint(&self, painter: &Painter, origin: Pos2) {
        for particle in &self.particles {
            painter.circle_filled(
                Pos2::new(origin.x + particle.x, origin.y + particle.y),
                particle.size,
                Color32::from_rgba_unmultiplied(0, 240, 255, (particle.opacity * 255.0) as u8),
            );
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i];
                let b = self.particles[j];
                let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                if let Some(alpha) = link_alpha(distance) {
                    painter.line_segment(
                        [
                            Pos2::new(origin.x + a.x, origin.y + a.y),
                            Pos2::new(origin.x + b.x, origin.y + b.y),
                        ],
                        Stroke::new(
                            1.0,
                            Color32::from_rgba_unmultiplied(176, 38, 255, (alpha * 255.0) as u8),
                        ),
                    );
                }
            }
        }
    }
}

/// Opacity of the line joining two particles: linear falloff, gone at the
/// cutoff distance.
fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some(0.1 * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_a_fixed_size() {
        let field = ParticleField::new(800.0, 600.0);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn particles_wrap_and_stay_inside_the_bounds() {
        let mut field = ParticleField::new(200.0, 100.0);
        for _ in 0..10_000 {
            field.step(1.0 / 60.0, 200.0, 100.0);
            for particle in &field.particles {
                assert!((0.0..=200.0).contains(&particle.x));
                assert!((0.0..=100.0).contains(&particle.y));
            }
        }
    }

    #[test]
    fn link_opacity_decays_linearly_and_cuts_off() {
        assert!((link_alpha(0.0).unwrap() - 0.1).abs() < 1e-6);
        assert!((link_alpha(50.0).unwrap() - 0.05).abs() < 1e-6);
        assert_eq!(link_alpha(LINK_DISTANCE), None);
        assert_eq!(link_alpha(500.0), None);
    }
}
