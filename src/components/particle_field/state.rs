//! Particle field simulation state.
//!
//! [`ParticleField`] owns everything the hero animation mutates: viewport bounds,
//! the particle population, the last pointer position and the RNG used to spawn
//! particles. Browser events reach it through [`ParticleField::resize`] and
//! [`ParticleField::set_pointer`]; the frame loop calls [`ParticleField::step`].

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::particles::Particle;
use super::theme::{Color, FieldStyle};

/// Pointer position used before the first pointer event, far outside any viewport.
pub const POINTER_SENTINEL: (f64, f64) = (-9999.0, -9999.0);

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Viewport x.
	pub x: f64,
	/// Viewport y.
	pub y: f64,
}

impl Default for Pointer {
	fn default() -> Self {
		Self {
			x: POINTER_SENTINEL.0,
			y: POINTER_SENTINEL.1,
		}
	}
}

/// A line to draw between two particles, by index into the population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Lower particle index.
	pub from: usize,
	/// Higher particle index.
	pub to: usize,
	/// Line opacity, fading to zero at the link distance.
	pub alpha: f64,
}

/// Radial gradient geometry for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vignette {
	/// Gradient center, x.
	pub cx: f64,
	/// Gradient center, y.
	pub cy: f64,
	/// Radius where the gradient starts, fully transparent.
	pub inner_radius: f64,
	/// Radius where the gradient reaches `outer_color`.
	pub outer_radius: f64,
	/// Color at the inner radius.
	pub inner_color: Color,
	/// Color at the outer radius and beyond.
	pub outer_color: Color,
}

/// Line alpha for two particles `dist` apart, or `None` when they are too far to connect.
pub fn link_alpha(dist: f64, max_dist: f64, base_alpha: f64) -> Option<f64> {
	(dist < max_dist).then(|| (1.0 - dist / max_dist) * base_alpha)
}

fn sanitize(extent: f64) -> f64 {
	if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}

/// Fixed-size population of drifting particles reacting to the pointer.
pub struct ParticleField {
	/// Tunables read on every spawn and step.
	pub style: FieldStyle,
	particles: Vec<Particle>,
	pointer: Pointer,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl ParticleField {
	/// Create a field seeded from OS entropy.
	pub fn new(style: FieldStyle, width: f64, height: f64) -> Self {
		Self::with_rng(style, width, height, StdRng::from_entropy())
	}

	/// Create a field with a reproducible particle layout.
	pub fn with_seed(style: FieldStyle, width: f64, height: f64, seed: u64) -> Self {
		Self::with_rng(style, width, height, StdRng::seed_from_u64(seed))
	}

	fn with_rng(style: FieldStyle, width: f64, height: f64, rng: StdRng) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(style.count),
			style,
			pointer: Pointer::default(),
			width: sanitize(width),
			height: sanitize(height),
			rng,
		};
		field.populate();
		field
	}

	/// Replace the whole population with fresh particles inside the current bounds.
	fn populate(&mut self) {
		let (style, rng) = (&self.style, &mut self.rng);
		let (w, h) = (self.width, self.height);
		self.particles.clear();
		self.particles
			.extend((0..style.count).map(|_| Particle::random(rng, style, w, h)));
	}

	/// Adopt new viewport bounds and regenerate every particle.
	///
	/// Old particles are discarded rather than remapped.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = sanitize(width);
		self.height = sanitize(height);
		self.populate();
		debug!(
			"particle field: resized to {}x{}, {} particles",
			self.width,
			self.height,
			self.particles.len()
		);
	}

	/// Record the latest pointer position. No smoothing is applied.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Pointer { x, y };
	}

	/// Advance every particle by one frame: drift, pointer repulsion, edge wrap.
	///
	/// Returns how many particles were repelled this frame.
	pub fn step(&mut self) -> usize {
		let Pointer { x: px, y: py } = self.pointer;
		let (radius, strength) = (self.style.repel_radius, self.style.repel_strength);
		let mut repelled = 0;

		for p in &mut self.particles {
			p.drift();
			if p.repel(px, py, radius, strength) {
				repelled += 1;
			}
			p.wrap(self.width, self.height);
		}

		repelled
	}

	/// All particle pairs close enough to be joined by a line.
	///
	/// Checks every unordered pair, so cost grows with the square of the population.
	pub fn links(&self) -> Vec<Link> {
		let (max_dist, base_alpha) = (self.style.link_distance, self.style.link_alpha);
		let mut links = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				if let Some(alpha) = link_alpha(a.distance_to(b), max_dist, base_alpha) {
					links.push(Link { from: i, to: j, alpha });
				}
			}
		}

		links
	}

	/// Vignette geometry centered on the viewport, scaled by its height.
	pub fn vignette(&self) -> Vignette {
		let style = &self.style.vignette;
		Vignette {
			cx: self.width / 2.0,
			cy: self.height / 2.0,
			inner_radius: self.height * style.inner,
			outer_radius: self.height * style.outer,
			inner_color: style.color.with_alpha(0.0),
			outer_color: style.color,
		}
	}

	/// Current population, always `style.count` long.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access to individual particles. The population size stays fixed.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Replace the population with a hand-placed one.
	#[cfg(test)]
	pub(crate) fn set_particles(&mut self, particles: Vec<Particle>) {
		self.particles = particles;
	}

	/// Last recorded pointer, or the off-screen sentinel.
	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	/// Viewport width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}
}
