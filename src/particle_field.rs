// The decorative particle field behind the hero section: a fixed-size set of
// drifting particles plus the proximity links drawn between close pairs.

use crate::particle::Particle;
use rand::Rng;

/// A line between two particles closer than `ParticleField::LINK_DISTANCE`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const DEFAULT_COUNT: usize = 100;
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const MAX_LINK_OPACITY: f64 = 0.1;

    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Discards every particle and fills a surface of the given size with
    /// `count` fresh ones.
    pub fn reset<R: Rng>(&mut self, width: f64, height: f64, count: usize, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, width, height));
        }
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Every unordered pair closer than the link distance, each pair once.
    ///
    /// O(n^2) over the field; fine at the default count.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |i| {
            ((i + 1)..particles.len()).filter_map(move |j| {
                let distance = particles[i].distance_to(&particles[j]);
                if distance < ParticleField::LINK_DISTANCE {
                    Some(Link {
                        from: i,
                        to: j,
                        opacity: link_opacity(distance),
                    })
                } else {
                    None
                }
            })
        })
    }
}

// Linear fade from MAX_LINK_OPACITY at distance 0 to 0 at LINK_DISTANCE
pub fn link_opacity(distance: f64) -> f64 {
    let fade = 1.0 - distance / ParticleField::LINK_DISTANCE;
    ParticleField::MAX_LINK_OPACITY * fade.max(0.0)
}
