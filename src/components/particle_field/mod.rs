//! Animated particle background for the hero section.
//!
//! A fixed population of faint points drifts across the viewport, links up with
//! nearby neighbours and shies away from the mouse:
//! - Linear drift with edge wrapping
//! - Pointer repulsion inside a fixed radius
//! - Distance-faded lines between close pairs
//! - A radial vignette darkening the edges
//!
//! The simulation ([`ParticleField`]) has no DOM dependency and can be driven
//! frame by frame with [`run`] against any [`Surface`].
//!
//! # Example
//!
//! ```ignore
//! use folio_site::{FieldStyle, HeroCanvas};
//!
//! view! { <HeroCanvas theme=FieldStyle { count: 60, ..Default::default() } /> }
//! ```

mod component;
mod frame_loop;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::HeroCanvas;
pub use frame_loop::{AnimationLoop, StopToken, run};
pub use particles::Particle;
pub use render::{Surface, render, tick};
pub use state::{Link, ParticleField, Pointer, Vignette, link_alpha};
pub use theme::{Color, FieldStyle};
