//! Colors and tunables for the particle hero.
//!
//! Every constant that shapes the field lives in [`FieldStyle`], so the page can
//! override any of them through the site config without touching the simulator.

use serde::{Deserialize, Deserializer};

fn opaque() -> f64 {
	1.0
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`; opaque when omitted from config.
	#[serde(default = "opaque")]
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `rgba(r,g,b,a)` as accepted by canvas fill and stroke styles.
	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Inclusive `[min, max]` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	/// Lower bound.
	pub min: f64,
	/// Upper bound.
	pub max: f64,
}

impl Span {
	/// Range from `min` to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Whether `value` lies within the bounds, both ends included.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Radial darkening painted behind the particles each frame.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VignetteStyle {
	/// Inner radius as a fraction of the viewport height (fully transparent).
	pub inner: f64,
	/// Outer radius as a fraction of the viewport height (`color` at full alpha).
	pub outer: f64,
	/// Edge color; the center fades to the same color at zero alpha.
	pub color: Color,
}

impl Default for VignetteStyle {
	fn default() -> Self {
		Self {
			inner: 0.1,
			outer: 0.9,
			color: Color::rgba(8, 11, 16, 0.7),
		}
	}
}

/// Particle field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Population size, constant between resizes.
	pub count: usize,
	/// Primary particle color.
	pub accent: Color,
	/// Secondary particle color.
	pub secondary: Color,
	/// Probability that a particle takes the secondary color.
	pub secondary_chance: f64,
	/// Per-axis velocity bound; velocities are drawn from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	/// Particle radius range. Config may give only one bound.
	#[serde(deserialize_with = "radius_span")]
	pub radius: Span,
	/// Particle opacity range. Config may give only one bound.
	#[serde(deserialize_with = "alpha_span")]
	pub alpha: Span,
	/// Pointer distance under which particles are pushed away.
	pub repel_radius: f64,
	/// Displacement applied per frame while inside `repel_radius`.
	pub repel_strength: f64,
	/// Pair distance under which a connecting line is drawn.
	pub link_distance: f64,
	/// Line alpha at zero distance, falling linearly to 0 at `link_distance`.
	pub link_alpha: f64,
	/// Line stroke width.
	pub link_width: f64,
	/// Line color, shared by every link regardless of particle colors.
	pub link_color: Color,
	/// Background gradient.
	pub vignette: VignetteStyle,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 90,
			accent: Color::rgb(77, 166, 255),
			secondary: Color::rgb(124, 58, 237),
			secondary_chance: 0.4,
			max_speed: 0.3,
			radius: Span::new(1.0, 2.5),
			alpha: Span::new(0.05, 0.5),
			repel_radius: 100.0,
			repel_strength: 1.5,
			link_distance: 140.0,
			link_alpha: 0.12,
			link_width: 0.8,
			link_color: Color::rgb(77, 166, 255),
			vignette: VignetteStyle::default(),
		}
	}
}

/// A [`Span`] with either bound optional, merged over a default.
#[derive(Deserialize)]
struct SpanPatch {
	min: Option<f64>,
	max: Option<f64>,
}

impl SpanPatch {
	fn over(self, base: Span) -> Span {
		Span::new(self.min.unwrap_or(base.min), self.max.unwrap_or(base.max))
	}
}

fn radius_span<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Span, D::Error> {
	Ok(SpanPatch::deserialize(deserializer)?.over(FieldStyle::default().radius))
}

fn alpha_span<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Span, D::Error> {
	Ok(SpanPatch::deserialize(deserializer)?.over(FieldStyle::default().alpha))
}
