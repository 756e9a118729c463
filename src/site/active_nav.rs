//! Highlights the nav link of the section currently scrolled into view.

use log::info;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

/// Active-link settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActiveNavConfig {
	/// Sections that can become current; each needs an `id`.
	pub section_selector: String,
	/// Nav links, matched to sections by `href="#id"`.
	pub link_selector: String,
	/// A section becomes current this many px before its top reaches the viewport top.
	pub offset: f64,
	/// CSS color for the current link.
	pub highlight: String,
}

impl Default for ActiveNavConfig {
	fn default() -> Self {
		Self {
			section_selector: "section[id]".into(),
			link_selector: ".nav-links a".into(),
			offset: 160.0,
			highlight: "#4da6ff".into(),
		}
	}
}

/// The last section (in document order) whose top, less `offset`, is at or above `scroll_y`.
pub fn current_section<'a, I>(scroll_y: f64, sections: I, offset: f64) -> Option<&'a str>
where
	I: IntoIterator<Item = (&'a str, f64)>,
{
	sections
		.into_iter()
		.filter(|&(_, top)| scroll_y >= top - offset)
		.map(|(id, _)| id)
		.last()
}

/// Inline color for a link pointing at `href`; empty clears the override.
pub fn link_color<'a>(href: &str, current: Option<&str>, highlight: &'a str) -> &'a str {
	match (current, href.strip_prefix('#')) {
		(Some(id), Some(target)) if id == target => highlight,
		_ => "",
	}
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
	dom::query_all(document, selector)
		.unwrap_or_default()
		.into_iter()
		.filter_map(|el: Element| el.dyn_into::<HtmlElement>().ok())
		.collect()
}

fn sync(window: &Window, config: &ActiveNavConfig) {
	let Some(document) = window.document() else {
		return;
	};
	let scroll_y = window.scroll_y().unwrap_or(0.0);

	let sections: Vec<(String, f64)> = html_elements(&document, &config.section_selector)
		.iter()
		.map(|sec| (sec.id(), sec.offset_top() as f64))
		.collect();
	let current = current_section(
		scroll_y,
		sections.iter().map(|(id, top)| (id.as_str(), *top)),
		config.offset,
	);

	for link in html_elements(&document, &config.link_selector) {
		let href = link.get_attribute("href").unwrap_or_default();
		let _ = link
			.style()
			.set_property("color", link_color(&href, current, &config.highlight));
	}
}

/// Re-evaluate the highlighted link on every scroll event.
pub fn install(window: &Window, config: &ActiveNavConfig) -> Result<(), JsValue> {
	let config = config.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		if let Some(win) = web_sys::window() {
			sync(&win, &config);
		}
	});
	dom::add_passive_listener(window, "scroll", on_scroll)?;
	info!("active nav: scroll tracking attached");
	Ok(())
}
