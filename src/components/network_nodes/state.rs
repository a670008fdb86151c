/// A point mass in the ambient background field. Plain data; seeding and
/// stepping take their configuration explicitly so the simulation can be
/// driven deterministically under test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

impl Particle {
	/// Spawn at a uniformly random position with per-axis velocity in
	/// `[-speed/2, speed/2)` and a radius in `[1, 3)` px. `rng` yields
	/// values in `[0, 1)`.
	pub fn spawn(width: f64, height: f64, speed: f64, rng: &mut impl FnMut() -> f64) -> Self {
		Self {
			x: rng() * width,
			y: rng() * height,
			vx: (rng() - 0.5) * speed,
			vy: (rng() - 0.5) * speed,
			radius: rng() * 2.0 + 1.0,
		}
	}

	/// Integrate one step, reflecting off the walls. Only the velocity
	/// flips on contact; the position is never clamped, so a particle may
	/// overshoot by up to one velocity step before it turns around.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}
}

/// The simulated field: a batch of particles bouncing inside the current
/// surface bounds.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
}

impl ParticleField {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			particles: Vec::new(),
			width,
			height,
		}
	}

	/// Discard every particle and spawn exactly `count` fresh ones inside
	/// the current bounds.
	pub fn reseed(&mut self, count: usize, speed: f64, rng: &mut impl FnMut() -> f64) {
		self.particles.clear();
		for _ in 0..count {
			self.particles
				.push(Particle::spawn(self.width, self.height, speed, rng));
		}
	}

	/// Advance every particle one step, in creation order.
	pub fn step(&mut self) {
		for particle in &mut self.particles {
			particle.step(self.width, self.height);
		}
	}

	/// Move the walls without touching the particles. Anything left outside
	/// the new bounds reflects back in through its own motion.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

pub fn distance(a: &Particle, b: &Particle) -> f64 {
	(a.x - b.x).hypot(a.y - b.y)
}

/// Edge opacity for a pair at `distance`: linear falloff inside the
/// threshold, no edge at or beyond it.
pub fn edge_opacity(distance: f64, threshold: f64) -> Option<f64> {
	(distance < threshold).then(|| 1.0 - distance / threshold)
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic stand-in for `Math.random`.
	fn test_rng() -> impl FnMut() -> f64 {
		let mut seed = 7_usize;
		move || {
			seed = (seed * 9301 + 49297) % 233280;
			(seed as f64) / 233280.0
		}
	}

	#[test]
	fn test_reseed_spawns_exact_count_in_bounds() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.reseed(80, 0.5, &mut test_rng());
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..=640.0).contains(&p.x));
			assert!((0.0..=480.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!((1.0..3.0).contains(&p.radius));
		}
	}

	#[test]
	fn test_reseed_discards_previous_batch() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.reseed(80, 0.5, &mut test_rng());
		field.reseed(30, 0.5, &mut test_rng());
		assert_eq!(field.particles.len(), 30);
	}

	#[test]
	fn test_step_reflects_off_right_wall() {
		let mut p = Particle {
			x: 99.8,
			y: 50.0,
			vx: 0.5,
			vy: 0.0,
			radius: 2.0,
		};
		p.step(100.0, 100.0);
		// One-step overshoot is accepted; the velocity must have flipped.
		assert!((p.x - 100.3).abs() < 1e-9);
		assert_eq!(p.vx, -0.5);

		p.step(100.0, 100.0);
		assert!((p.x - 99.8).abs() < 1e-9);
	}

	#[test]
	fn test_positions_stay_within_one_step_of_bounds() {
		let (w, h) = (320.0, 200.0);
		let mut field = ParticleField::new(w, h);
		field.reseed(50, 2.0, &mut test_rng());

		for _ in 0..5000 {
			field.step();
			for p in &field.particles {
				assert!(p.x >= -p.vx.abs() - 1.0 && p.x <= w + p.vx.abs() + 1.0);
				assert!(p.y >= -p.vy.abs() - 1.0 && p.y <= h + p.vy.abs() + 1.0);
			}
		}
	}

	#[test]
	fn test_empty_field_steps_without_error() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.reseed(0, 0.5, &mut test_rng());
		field.step();
		assert!(field.particles.is_empty());
	}

	#[test]
	fn test_resize_keeps_particles_unnormalized() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.reseed(10, 0.5, &mut test_rng());
		let before = field.particles.clone();

		field.resize(100.0, 100.0);
		assert_eq!(field.particles, before);
		assert_eq!((field.width, field.height), (100.0, 100.0));
	}

	#[test]
	fn test_out_of_bounds_particle_turns_back_after_resize() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.particles.push(Particle {
			x: 500.0,
			y: 50.0,
			vx: 0.5,
			vy: 0.0,
			radius: 1.0,
		});
		field.resize(100.0, 100.0);

		field.step();
		assert_eq!(field.particles[0].vx, -0.5);
	}

	#[test]
	fn test_distance_is_symmetric() {
		let a = Particle {
			x: 3.0,
			y: 4.0,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
		};
		let b = Particle {
			x: 9.0,
			y: 12.0,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
		};
		assert_eq!(distance(&a, &b), distance(&b, &a));
		assert!((distance(&a, &b) - 10.0).abs() < 1e-9);
	}

	#[test]
	fn test_edge_opacity_falls_off_linearly() {
		assert_eq!(edge_opacity(0.0, 150.0), Some(1.0));
		assert_eq!(edge_opacity(75.0, 150.0), Some(0.5));

		let mut last = 1.0;
		for d in 1..150 {
			let opacity = edge_opacity(d as f64, 150.0).unwrap();
			assert!(opacity < last);
			assert!(opacity > 0.0);
			last = opacity;
		}
	}

	#[test]
	fn test_edge_vanishes_at_threshold() {
		assert_eq!(edge_opacity(150.0, 150.0), None);
		assert_eq!(edge_opacity(151.0, 150.0), None);
	}
}
