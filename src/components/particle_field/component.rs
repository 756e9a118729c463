//! Leptos component wrapping the particle hero canvas.
//!
//! The component draws into the page's own canvas when one with the requested
//! id already exists, and otherwise mounts a fixed full-viewport canvas. It owns
//! a [`ParticleField`] and feeds it window `resize` and `mousemove` events. An
//! [`AnimationLoop`] ticks and renders the field every frame until cleanup,
//! which stops the loop and detaches the listeners.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use super::frame_loop::AnimationLoop;
use super::render;
use super::state::ParticleField;
use super::theme::FieldStyle;
use crate::dom::{self, EventListener};

type SharedField = Rc<RefCell<Option<ParticleField>>>;

/// Everything that has to be torn down when the component goes away.
struct HeroRuntime {
	animation: AnimationLoop,
	_listeners: Vec<EventListener>,
}

impl Drop for HeroRuntime {
	fn drop(&mut self) {
		self.animation.stop();
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// The page's own canvas with this id, if the markup already has one.
fn existing_canvas(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}

/// Size the canvas backing store to the viewport and return the new extent.
fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = dom::viewport_size(window).unwrap_or((0.0, 0.0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

/// Wire window events into the shared field.
fn install_listeners(
	window: &Window,
	canvas: &HtmlCanvasElement,
	field: &SharedField,
) -> Result<Vec<EventListener>, JsValue> {
	let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
	let on_resize = EventListener::new(window, "resize", move |_| {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (w, h) = fit_to_viewport(&win, &canvas_resize);
		if let Some(ref mut f) = *field_resize.borrow_mut() {
			f.resize(w, h);
		}
	})?;

	let field_pointer = field.clone();
	let on_pointer = EventListener::new(window, "mousemove", move |ev| {
		let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
			return;
		};
		if let Some(ref mut f) = *field_pointer.borrow_mut() {
			f.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
		}
	})?;

	Ok(vec![on_resize, on_pointer])
}

/// Full-viewport animated particle background.
///
/// Pass a [`FieldStyle`] as `theme` to override colors, counts and distances; the
/// default matches the site's original look. If the page already contains a
/// canvas with `id`, the field draws into it and its styling is left alone.
/// Otherwise a canvas fixed behind page content is mounted. The pointer is
/// tracked on the window either way.
#[component]
pub fn HeroCanvas(
	/// Field tunables; defaults to the stock look.
	#[prop(optional)]
	theme: FieldStyle,
	/// Id of the canvas to draw into or create.
	#[prop(default = "hero-canvas")]
	id: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: SharedField = Rc::new(RefCell::new(None));
	let runtime: Rc<RefCell<Option<HeroRuntime>>> = Rc::new(RefCell::new(None));
	let existing = dom::window_document().and_then(|(_, document)| existing_canvas(&document, id));
	let mount_own = existing.is_none();

	let runtime_cleanup = SendWrapper::new(runtime.clone());
	on_cleanup(move || {
		if runtime_cleanup.take().borrow_mut().take().is_some() {
			info!("hero canvas: cleaned up");
		}
	});

	Effect::new(move |_| {
		let canvas = match existing.clone() {
			Some(canvas) => canvas,
			None => match canvas_ref.get() {
				Some(canvas) => canvas.into(),
				None => return,
			},
		};
		if field.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("hero canvas: no window, particle field disabled");
			return;
		};
		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("hero canvas: 2d context unavailable, particle field disabled");
			return;
		};

		let (w, h) = fit_to_viewport(&window, &canvas);
		*field.borrow_mut() = Some(ParticleField::new(theme.clone(), w, h));

		let listeners = install_listeners(&window, &canvas, &field).unwrap_or_else(|e| {
			warn!("hero canvas: failed to attach listeners: {:?}", e);
			Vec::new()
		});

		let field_anim = field.clone();
		match AnimationLoop::start(&window, move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				render::tick(f, &mut ctx);
			}
		}) {
			Ok(animation) => {
				*runtime.borrow_mut() = Some(HeroRuntime {
					animation,
					_listeners: listeners,
				});
				info!("hero canvas: animating {} particles at {}x{}", theme.count, w, h);
			}
			Err(e) => warn!("hero canvas: failed to start animation: {:?}", e),
		}
	});

	mount_own.then(|| {
		view! {
			<canvas
				node_ref=canvas_ref
				id=id
				class="hero-canvas"
				style="position: fixed; inset: 0; display: block; z-index: -1; pointer-events: none;"
			/>
		}
	})
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::*;
	use web_sys::HtmlElement;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn count(document: &Document, selector: &str) -> u32 {
		document.query_selector_all(selector).unwrap().length()
	}

	fn mount_point(document: &Document) -> HtmlElement {
		let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
		document.body().unwrap().append_child(&host).unwrap();
		host
	}

	#[wasm_bindgen_test]
	fn reuses_canvas_already_in_markup() {
		let (_, document) = dom::window_document().unwrap();
		let canvas = document.create_element("canvas").unwrap();
		canvas.set_id("hero-canvas");
		document.body().unwrap().append_child(&canvas).unwrap();
		let host = mount_point(&document);

		let handle = leptos::mount::mount_to(host.clone(), || view! { <HeroCanvas/> });
		assert_eq!(count(&document, "#hero-canvas"), 1);
		assert_eq!(count(&document, "canvas"), 1);

		drop(handle);
		canvas.remove();
		host.remove();
	}

	#[wasm_bindgen_test]
	fn mounts_own_canvas_when_markup_has_none() {
		let (_, document) = dom::window_document().unwrap();
		let host = mount_point(&document);

		let handle = leptos::mount::mount_to(host.clone(), || view! { <HeroCanvas id="hero-canvas-own"/> });
		assert_eq!(count(&document, "#hero-canvas-own"), 1);

		drop(handle);
		assert_eq!(count(&document, "#hero-canvas-own"), 0);
		host.remove();
	}
}
