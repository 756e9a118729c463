//! Drifting points that make up the hero background.

use rand::Rng;

use super::theme::{Color, FieldStyle, Span};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in viewport pixels.
	pub x: f64,
	/// Vertical position in viewport pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Drawn circle radius.
	pub radius: f64,
	/// Fill opacity, applied over `color`.
	pub alpha: f64,
	/// Base fill color; its own alpha is replaced by `alpha` when drawn.
	pub color: Color,
}

/// Uniform draw from `[min, max)`; never panics on a degenerate span.
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.r#gen::<f64>() * (max - min)
}

fn sample_span<R: Rng>(rng: &mut R, span: Span) -> f64 {
	sample(rng, span.min, span.max)
}

impl Particle {
	/// Spawn a particle anywhere inside a `width` x `height` viewport.
	pub fn random<R: Rng>(rng: &mut R, style: &FieldStyle, width: f64, height: f64) -> Self {
		let color = if rng.r#gen::<f64>() < style.secondary_chance {
			style.secondary
		} else {
			style.accent
		};

		Self {
			x: sample(rng, 0.0, width),
			y: sample(rng, 0.0, height),
			vx: sample(rng, -style.max_speed, style.max_speed),
			vy: sample(rng, -style.max_speed, style.max_speed),
			radius: sample_span(rng, style.radius),
			alpha: sample_span(rng, style.alpha),
			color,
		}
	}

	/// Advance by one frame of velocity.
	pub fn drift(&mut self) {
		self.x += self.vx;
		self.y += self.vy;
	}

	/// Push the particle away from `(px, py)` when it is strictly closer than `radius`.
	///
	/// Returns whether a displacement was applied. A particle sitting exactly on the
	/// pointer has no defined direction and is left alone.
	pub fn repel(&mut self, px: f64, py: f64, radius: f64, strength: f64) -> bool {
		let (dx, dy) = (self.x - px, self.y - py);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist <= 0.0 || dist >= radius {
			return false;
		}
		self.x += dx / dist * strength;
		self.y += dy / dist * strength;
		true
	}

	/// Snap each axis that left `[0, bound]` to the opposite edge.
	pub fn wrap(&mut self, width: f64, height: f64) {
		self.x = wrap_axis(self.x, width);
		self.y = wrap_axis(self.y, height);
	}

	/// Euclidean distance between particle centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

fn wrap_axis(value: f64, bound: f64) -> f64 {
	if value < 0.0 {
		bound
	} else if value > bound {
		0.0
	} else {
		value
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.1,
			color: Color::rgb(77, 166, 255),
		}
	}

	#[test]
	fn random_particles_respect_ranges() {
		let style = FieldStyle::default();
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..2000 {
			let p = Particle::random(&mut rng, &style, 800.0, 600.0);
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!((-0.3..=0.3).contains(&p.vx));
			assert!((-0.3..=0.3).contains(&p.vy));
			assert!(style.radius.contains(p.radius));
			assert!(style.alpha.contains(p.alpha));
			assert!(p.color == style.accent || p.color == style.secondary);
		}
	}

	#[test]
	fn color_split_is_roughly_forty_sixty() {
		let style = FieldStyle::default();
		let mut rng = StdRng::seed_from_u64(99);
		let secondary = (0..10_000)
			.map(|_| Particle::random(&mut rng, &style, 100.0, 100.0))
			.filter(|p| p.color == style.secondary)
			.count();
		assert!((3500..4500).contains(&secondary), "secondary count {secondary}");
	}

	#[test]
	fn degenerate_viewport_spawns_at_origin() {
		let mut rng = StdRng::seed_from_u64(1);
		let p = Particle::random(&mut rng, &FieldStyle::default(), 0.0, 0.0);
		assert_eq!((p.x, p.y), (0.0, 0.0));
	}

	#[test]
	fn wrap_snaps_to_opposite_edge() {
		let mut low = still(-0.5, 10.0);
		low.wrap(800.0, 600.0);
		assert_eq!(low.x, 800.0);

		let mut high = still(800.5, 600.5);
		high.wrap(800.0, 600.0);
		assert_eq!((high.x, high.y), (0.0, 0.0));

		let mut inside = still(800.0, 0.0);
		inside.wrap(800.0, 600.0);
		assert_eq!((inside.x, inside.y), (800.0, 0.0));
	}

	#[test]
	fn repel_pushes_along_pointer_direction() {
		let mut p = still(99.0, 0.0);
		assert!(p.repel(0.0, 0.0, 100.0, 1.5));
		assert!((p.x - 100.5).abs() < 1e-12);
		assert_eq!(p.y, 0.0);

		let mut diagonal = still(30.0, 40.0);
		assert!(diagonal.repel(0.0, 0.0, 100.0, 1.5));
		assert!((diagonal.x - 30.9).abs() < 1e-12);
		assert!((diagonal.y - 41.2).abs() < 1e-12);
	}

	#[test]
	fn repel_ignores_far_and_coincident_particles() {
		let mut far = still(101.0, 0.0);
		assert!(!far.repel(0.0, 0.0, 100.0, 1.5));
		assert_eq!(far.x, 101.0);

		let mut edge = still(100.0, 0.0);
		assert!(!edge.repel(0.0, 0.0, 100.0, 1.5));

		let mut on_top = still(5.0, 5.0);
		assert!(!on_top.repel(5.0, 5.0, 100.0, 1.5));
		assert_eq!((on_top.x, on_top.y), (5.0, 5.0));
	}
}
