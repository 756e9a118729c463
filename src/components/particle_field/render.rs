//! Drawing for the particle hero.
//!
//! Each frame is painted in three passes:
//! 1. Clear and vignette (screen space)
//! 2. Particles as filled circles, each with its own color and alpha
//! 3. Connecting lines between close pairs
//!
//! Drawing goes through the [`Surface`] trait so frames can be recorded and
//! inspected without a browser canvas.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ParticleField, Vignette};
use super::theme::Color;

/// The 2D drawing primitives the hero needs.
pub trait Surface {
	/// Erase `0..width` x `0..height`.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill `0..width` x `0..height` with a radial gradient.
	fn fill_vignette(&mut self, vignette: &Vignette, width: f64, height: f64);
	/// Fill a circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_vignette(&mut self, vignette: &Vignette, width: f64, height: f64) {
		// Fails on a zero-sized or non-finite viewport; that frame simply has no vignette.
		let Ok(gradient) = self.create_radial_gradient(
			vignette.cx,
			vignette.cy,
			vignette.inner_radius,
			vignette.cx,
			vignette.cy,
			vignette.outer_radius,
		) else {
			return;
		};

		let _ = gradient.add_color_stop(0.0, &vignette.inner_color.to_css());
		let _ = gradient.add_color_stop(1.0, &vignette.outer_color.to_css());

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Paints the current field state onto `surface`.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let (width, height) = (field.width(), field.height());

	surface.clear(width, height);
	surface.fill_vignette(&field.vignette(), width, height);

	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.radius, p.color.with_alpha(p.alpha));
	}

	draw_links(field, surface);
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let particles = field.particles();
	let (color, width) = (field.style.link_color, field.style.link_width);

	for link in field.links() {
		let (a, b) = (&particles[link.from], &particles[link.to]);
		surface.stroke_line((a.x, a.y), (b.x, b.y), width, color.with_alpha(link.alpha));
	}
}

/// Advance the simulation by one frame and draw it.
pub fn tick<S: Surface + ?Sized>(field: &mut ParticleField, surface: &mut S) {
	field.step();
	render(field, surface);
}
