// Simple particle struct to keep track of individual position, velocity,
// radius and opacity. Particles are interchangeable; only position and
// velocity carry over from one frame to the next.

use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub const MAX_AXIS_VELOCITY: f64 = 0.25;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;
    pub const MIN_OPACITY: f64 = 0.2;
    pub const MAX_OPACITY: f64 = 0.7;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    // Uniformly random particle somewhere inside a width x height surface
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let max_vel = Particle::MAX_AXIS_VELOCITY;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (2.0 * max_vel) - max_vel;
        let vel_y = rng.gen::<f64>() * (2.0 * max_vel) - max_vel;
        let radius =
            rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS) + Particle::MIN_RADIUS;
        let opacity = rng.gen::<f64>() * (Particle::MAX_OPACITY - Particle::MIN_OPACITY)
            + Particle::MIN_OPACITY;
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, opacity)
    }

    /// Advances one frame and reflects off the walls of a width x height box.
    ///
    /// The position is not clamped: a particle that crosses a wall is drawn
    /// once outside the box and then travels back in.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, 640.0, 480.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 640.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 480.0);
            assert!(p.vel[0].abs() <= Particle::MAX_AXIS_VELOCITY);
            assert!(p.vel[1].abs() <= Particle::MAX_AXIS_VELOCITY);
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
            assert!(p.opacity >= 0.2 && p.opacity <= 0.7);
        }
    }

    #[test]
    fn reflects_once_when_crossing_left_wall() {
        let mut p = Particle::new([0.1, 50.0], [-0.2, 0.0], 2.0, 0.5);

        p.step(100.0, 100.0);
        assert!(p.pos[0] < 0.0);
        assert_eq!(p.vel[0], 0.2);

        p.step(100.0, 100.0);
        assert!(p.pos[0] > 0.0);
        assert_eq!(p.vel[0], 0.2);

        p.step(100.0, 100.0);
        assert_eq!(p.vel[0], 0.2);
    }

    #[test]
    fn reflects_axes_independently() {
        let mut p = Particle::new([99.9, 50.0], [0.2, 0.1], 2.0, 0.5);
        p.step(100.0, 100.0);
        assert_eq!(p.vel, [-0.2, 0.1]);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Particle::new([0.0, 0.0], [0.0, 0.0], 1.0, 0.5);
        let b = Particle::new([3.0, 4.0], [0.0, 0.0], 1.0, 0.5);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
