//! Behaviours attached to the static page markup.
//!
//! Each submodule exposes an `install` function that looks up its elements,
//! registers the listeners it needs and returns. Missing elements are logged
//! and skipped so a page can opt out of any behaviour by omitting the markup.

pub mod active_nav;
pub mod navbar;
pub mod reveal;
pub mod typewriter;

use log::warn;
use web_sys::Window;

use crate::config::SiteConfig;

/// Attach every page behaviour, logging (not failing on) individual errors.
pub fn install_all(window: &Window, config: &SiteConfig) {
	if let Err(e) = navbar::install(window, &config.navbar) {
		warn!("navbar: install failed: {:?}", e);
	}
	if let Err(e) = reveal::install(window, &config.reveal) {
		warn!("reveal: install failed: {:?}", e);
	}
	if let Err(e) = active_nav::install(window, &config.active_nav) {
		warn!("active nav: install failed: {:?}", e);
	}
	if let Err(e) = typewriter::install(window, &config.typing) {
		warn!("typewriter: install failed: {:?}", e);
	}
}
