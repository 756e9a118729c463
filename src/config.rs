//! Page-level configuration.
//!
//! Every knob has a default matching the site's stock look. A page can override
//! any subset by embedding JSON in `<script id="site-config" type="application/json">`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use crate::components::particle_field::FieldStyle;
use crate::site::active_nav::ActiveNavConfig;
use crate::site::navbar::NavbarConfig;
use crate::site::reveal::RevealConfig;
use crate::site::typewriter::TypingConfig;

/// Id of the script element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Settings for everything the site script drives.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Particle hero tunables.
	pub field: FieldStyle,
	/// Navbar shadow on scroll.
	pub navbar: NavbarConfig,
	/// Scroll-triggered fade-in.
	pub reveal: RevealConfig,
	/// Nav link highlighting for the section in view.
	pub active_nav: ActiveNavConfig,
	/// Hero tagline typing effect.
	pub typing: TypingConfig,
}

impl SiteConfig {
	/// Parse overrides; absent keys keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Read overrides from the config script element, falling back to defaults.
pub fn load(document: &Document) -> SiteConfig {
	let Some(script) = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
	else {
		return SiteConfig::default();
	};
	let Ok(text) = script.text() else {
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&text) {
		Ok(config) => {
			info!("site config: loaded overrides from #{}", CONFIG_ELEMENT_ID);
			config
		}
		Err(e) => {
			warn!("site config: failed to parse #{}: {}", CONFIG_ELEMENT_ID, e);
			SiteConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn defaults_match_stock_site() {
		let config = SiteConfig::default();
		assert_eq!(config.field.count, 90);
		assert_eq!(config.navbar.threshold, 40.0);
		assert_eq!(config.reveal.threshold, 0.12);
		assert_eq!(config.reveal.stagger_ms, 100);
		assert_eq!(config.active_nav.offset, 160.0);
		assert_eq!(config.active_nav.highlight, "#4da6ff");
		assert_eq!(config.typing.interval_ms, 38);
	}

	#[test]
	fn nested_overrides_are_partial() {
		let config = SiteConfig::from_json(
			r#"{
				"field": { "count": 40, "accent": { "r": 255, "g": 0, "b": 0 } },
				"typing": { "interval_ms": 20 }
			}"#,
		)
		.unwrap();
		assert_eq!(config.field.count, 40);
		assert_eq!(config.field.accent.r, 255);
		assert_eq!(config.field.repel_radius, 100.0);
		assert_eq!(config.typing.interval_ms, 20);
		assert_eq!(config.typing.selector, ".hero-tag");
		assert_eq!(config.navbar, NavbarConfig::default());
	}

	#[test]
	fn span_override_keeps_the_other_bound() {
		let config = SiteConfig::from_json(r#"{"field":{"radius":{"min":2}}}"#).unwrap();
		assert_eq!(config.field.radius.min, 2.0);
		assert_eq!(config.field.radius.max, 2.5);
		assert_eq!(config.field.alpha, FieldStyle::default().alpha);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteConfig::from_json(r#"{"field": {"count": "many"}}"#).is_err());
	}
}
