//! Frame scheduling for the particle hero.
//!
//! [`run`] drives the simulation synchronously for as long as a caller-supplied
//! predicate allows. [`AnimationLoop`] is the browser counterpart: it re-arms
//! itself through `requestAnimationFrame` until its [`StopToken`] is stopped.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::render::{self, Surface};
use super::state::ParticleField;

/// Tick `field` onto `surface` until `should_continue` returns false.
///
/// The predicate is consulted before every frame and receives the number of
/// frames rendered so far. Returns the total frame count.
pub fn run<S, F>(field: &mut ParticleField, surface: &mut S, mut should_continue: F) -> u64
where
	S: Surface + ?Sized,
	F: FnMut(u64, &ParticleField) -> bool,
{
	let mut frames = 0;
	while should_continue(frames, field) {
		render::tick(field, surface);
		frames += 1;
	}
	frames
}

/// Shared stop flag, checked once per frame.
#[derive(Clone, Debug)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
	/// A token that has not been stopped yet.
	pub fn new() -> Self {
		Self(Arc::new(AtomicBool::new(false)))
	}

	/// Ask every holder of this token to stop after the current frame.
	pub fn stop(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	/// Whether [`StopToken::stop`] was called on this token or one of its clones.
	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

impl Default for StopToken {
	fn default() -> Self {
		Self::new()
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop with a cancellation token.
pub struct AnimationLoop {
	token: StopToken,
}

impl AnimationLoop {
	/// Start calling `frame` once per display refresh until [`AnimationLoop::stop`].
	pub fn start(window: &Window, mut frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
		let token = StopToken::new();
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (token_inner, callback_inner) = (token.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			if token_inner.is_stopped() {
				// Releases this closure and the Rc cycle it sits in.
				let _ = callback_inner.borrow_mut().take();
				info!("particle field: animation loop stopped");
				return;
			}
			frame();
			let Some(window) = web_sys::window() else {
				warn!("particle field: window gone, stopping animation loop");
				return;
			};
			if let Some(ref cb) = *callback_inner.borrow() {
				if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					warn!("particle field: requestAnimationFrame failed: {:?}", e);
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			window.request_animation_frame(cb.as_ref().unchecked_ref())?;
		}

		Ok(Self { token })
	}

	/// Stop rescheduling; the pending frame returns without drawing.
	pub fn stop(&self) {
		self.token.stop();
	}

	/// Whether the loop will keep drawing frames.
	pub fn is_running(&self) -> bool {
		!self.token.is_stopped()
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::tests::{Op, Recorder};
	use super::super::theme::FieldStyle;
	use super::*;

	#[test]
	fn run_stops_when_predicate_says_so() {
		let mut field = ParticleField::with_seed(FieldStyle::default(), 800.0, 600.0, 5);
		let mut recorder = Recorder::default();

		let frames = run(&mut field, &mut recorder, |n, _| n < 3);

		assert_eq!(frames, 3);
		let clears = recorder.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count();
		assert_eq!(clears, 3);
	}

	#[test]
	fn run_stops_once_token_is_stopped() {
		let mut field = ParticleField::with_seed(FieldStyle::default(), 800.0, 600.0, 5);
		let mut recorder = Recorder::default();
		let token = StopToken::new();
		let handle = token.clone();

		let frames = run(&mut field, &mut recorder, |n, _| {
			if n == 4 {
				handle.stop();
			}
			!token.is_stopped()
		});

		assert_eq!(frames, 4);
		assert!(token.is_stopped());
	}

	#[test]
	fn fresh_token_is_not_stopped() {
		let token = StopToken::default();
		assert!(!token.is_stopped());
		token.clone().stop();
		assert!(token.is_stopped());
	}

	#[test]
	fn run_with_false_predicate_draws_nothing() {
		let mut field = ParticleField::with_seed(FieldStyle::default(), 800.0, 600.0, 5);
		let mut recorder = Recorder::default();
		assert_eq!(run(&mut field, &mut recorder, |_, _| false), 0);
		assert!(recorder.ops.is_empty());
	}

	#[test]
	fn long_run_with_distant_pointer_stays_in_bounds() {
		let mut field = ParticleField::with_seed(FieldStyle::default(), 800.0, 600.0, 2024);
		field.set_pointer(-9999.0, -9999.0);
		let mut recorder = Recorder::default();

		let frames = run(&mut field, &mut recorder, |n, f| {
			assert!(f.particles().iter().all(|p| (0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y)));
			n < 1000
		});

		assert_eq!(frames, 1000);
		assert_eq!(field.particles().len(), 90);
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use std::cell::Cell;

	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn stop_ends_the_loop() {
		let window = web_sys::window().unwrap();
		let frames = Rc::new(Cell::new(0));
		let counter = frames.clone();

		let animation = AnimationLoop::start(&window, move || counter.set(counter.get() + 1)).unwrap();
		assert!(animation.is_running());

		animation.stop();
		assert!(!animation.is_running());
		// the first frame is only scheduled, never run synchronously
		assert_eq!(frames.get(), 0);
	}
}
