//! Types the hero tagline out one character at a time.

use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

/// Typing effect settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	/// Element whose text is typed out.
	pub selector: String,
	/// Milliseconds between characters.
	pub interval_ms: i32,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			selector: ".hero-tag".into(),
			interval_ms: 38,
		}
	}
}

/// Progressive reveal of a fixed string.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	typed: usize,
}

impl Typewriter {
	/// Nothing typed yet.
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			typed: 0,
		}
	}

	/// Type one more character, returning the character typed.
	pub fn advance(&mut self) -> Option<char> {
		let c = *self.chars.get(self.typed)?;
		self.typed += 1;
		Some(c)
	}

	/// Everything typed so far.
	pub fn text(&self) -> String {
		self.chars[..self.typed].iter().collect()
	}

	/// Whether every character has been typed.
	pub fn is_done(&self) -> bool {
		self.typed >= self.chars.len()
	}
}

/// Start typing out the tagline. A page without it is left alone.
pub fn install(window: &Window, config: &TypingConfig) -> Result<(), JsValue> {
	let Some(tag) = window
		.document()
		.and_then(|d| d.query_selector(&config.selector).ok().flatten())
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		warn!("typewriter: {} not found", config.selector);
		return Ok(());
	};

	let full_text = tag.text_content().unwrap_or_default();
	let mut writer = Typewriter::new(full_text.trim());
	tag.set_text_content(Some(""));
	tag.style().set_property("opacity", "1")?;
	if writer.is_done() {
		return Ok(());
	}

	let handle = Rc::new(Cell::new(0));
	let handle_inner = handle.clone();
	let on_tick = Closure::<dyn FnMut()>::new(move || {
		if writer.advance().is_some() {
			tag.set_text_content(Some(&writer.text()));
		}
		if writer.is_done() {
			if let Some(win) = web_sys::window() {
				win.clear_interval_with_handle(handle_inner.get());
			}
		}
	});
	handle.set(window.set_interval_with_callback_and_timeout_and_arguments_0(
		on_tick.as_ref().unchecked_ref(),
		config.interval_ms,
	)?);
	on_tick.forget();
	info!("typewriter: typing {} characters", full_text.trim().chars().count());
	Ok(())
}
