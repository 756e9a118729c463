//! Navbar styling that follows the scroll position.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::dom;

/// Navbar scroll settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
	/// Id of the navbar element.
	pub element_id: String,
	/// Class toggled while the page is scrolled.
	pub scrolled_class: String,
	/// Scroll offset (px) past which the navbar counts as scrolled.
	pub threshold: f64,
}

impl Default for NavbarConfig {
	fn default() -> Self {
		Self {
			element_id: "navbar".into(),
			scrolled_class: "scrolled".into(),
			threshold: 40.0,
		}
	}
}

/// Whether the page is scrolled strictly past `threshold`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
	scroll_y > threshold
}

fn sync(window: &Window, navbar: &Element, config: &NavbarConfig) {
	let scrolled = is_scrolled(window.scroll_y().unwrap_or(0.0), config.threshold);
	let _ = navbar
		.class_list()
		.toggle_with_force(&config.scrolled_class, scrolled);
}

/// Toggle the scrolled class on every scroll event. A page without the navbar is left alone.
pub fn install(window: &Window, config: &NavbarConfig) -> Result<(), JsValue> {
	let Some(navbar) = window
		.document()
		.and_then(|d| d.get_element_by_id(&config.element_id))
	else {
		warn!("navbar: #{} not found", config.element_id);
		return Ok(());
	};

	let config = config.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		if let Some(win) = web_sys::window() {
			sync(&win, &navbar, &config);
		}
	});
	dom::add_passive_listener(window, "scroll", on_scroll)?;
	info!("navbar: scroll styling attached");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scrolled_only_past_threshold() {
		assert!(!is_scrolled(0.0, 40.0));
		assert!(!is_scrolled(40.0, 40.0));
		assert!(is_scrolled(40.5, 40.0));
	}
}
