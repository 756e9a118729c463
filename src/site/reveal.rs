//! Scroll-triggered reveal animations.
//!
//! Matching elements get a `visible` class the first time they intersect the
//! viewport. Siblings revealed together are staggered by their position among
//! the parent's matching children, so a row of cards fades in one after another.

use log::{debug, info};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node, Window,
};

use crate::dom;

/// Reveal animation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Elements to reveal.
	pub selector: String,
	/// Class added once an element scrolls into view.
	pub visible_class: String,
	/// Fraction of the element that must be visible to trigger.
	pub threshold: f64,
	/// Delay added per preceding sibling, in milliseconds.
	pub stagger_ms: i32,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: "[data-animate], .timeline-item, .value-card, .edu-card".into(),
			visible_class: "visible".into(),
			threshold: 0.12,
			stagger_ms: 100,
		}
	}
}

/// Transition delay for the element at `index` among its siblings.
pub fn stagger_delay(index: usize, step_ms: i32) -> i32 {
	i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(step_ms)
}

/// Position of `target` among its parent's children matching `selector`.
fn sibling_index(target: &Element, selector: &str) -> usize {
	let Some(parent) = target.parent_element() else {
		return 0;
	};
	let Ok(list) = parent.query_selector_all(selector) else {
		return 0;
	};
	let node: &Node = target;
	dom::elements(&list)
		.iter()
		.position(|el| el.is_same_node(Some(node)))
		.unwrap_or(0)
}

fn reveal_later(window: &Window, target: Element, class: String, delay_ms: i32) {
	let show = Closure::once_into_js(move || {
		let _ = target.class_list().add_1(&class);
	});
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(show.unchecked_ref(), delay_ms);
}

fn on_entries(entries: js_sys::Array, observer: &IntersectionObserver, config: &RevealConfig) {
	let Some(window) = web_sys::window() else {
		return;
	};
	for entry in entries.iter() {
		let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
			continue;
		};
		if !entry.is_intersecting() {
			continue;
		}
		let target = entry.target();
		let delay = stagger_delay(sibling_index(&target, &config.selector), config.stagger_ms);
		debug!("reveal: showing element in {}ms", delay);
		observer.unobserve(&target);
		reveal_later(&window, target, config.visible_class.clone(), delay);
	}
}

/// Observe every matching element and reveal each one once.
pub fn install(window: &Window, config: &RevealConfig) -> Result<(), JsValue> {
	let Some(document) = window.document() else {
		return Ok(());
	};
	let targets = dom::query_all(&document, &config.selector)?;

	let cfg = config.clone();
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			on_entries(entries, &observer, &cfg);
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	callback.forget();

	for el in &targets {
		observer.observe(el);
	}
	info!("reveal: observing {} elements", targets.len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delay_grows_with_sibling_position() {
		assert_eq!(stagger_delay(0, 100), 0);
		assert_eq!(stagger_delay(3, 100), 300);
	}

	#[test]
	fn delay_saturates() {
		assert_eq!(stagger_delay(usize::MAX, 100), i32::MAX);
	}
}
