//! Shared UI crate for Genderscope. Views, presentational components, and the
//! data layer (API client, filters, transforms) live here; the `web` crate
//! supplies routing and mounts these views.

pub mod components;
pub mod core;
pub mod views;
