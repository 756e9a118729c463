//! Leptos components mounted by the site.

pub mod particle_field;
