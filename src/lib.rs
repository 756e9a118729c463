//! folio-site: client-side behaviour for a personal portfolio site.
//!
//! This crate renders the animated particle hero background and wires the small
//! scroll-driven touches on the static page: navbar styling, reveal-on-scroll,
//! active nav link highlighting and the tagline typing effect.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

// Pulled in for its `js` feature so `rand` can seed from the browser.
use getrandom as _;

pub mod components;
pub mod config;
pub mod dom;
pub mod site;

pub use components::particle_field::{FieldStyle, HeroCanvas, ParticleField};
pub use config::SiteConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-site: logging initialized");
}

/// Main application component.
/// Loads page config, attaches page behaviours and renders the hero canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = dom::window_document()
		.map(|(_, document)| config::load(&document))
		.unwrap_or_default();

	let site_config = config.clone();
	Effect::new(move |_| match web_sys::window() {
		Some(window) => site::install_all(&window, &site_config),
		None => warn!("folio-site: no window, page behaviours disabled"),
	});

	view! {
		<Meta name="theme-color" content="#080b10" />
		<HeroCanvas theme=config.field />
	}
}
