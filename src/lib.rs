//! Client-side behaviour for the folio page, compiled to WebAssembly.
//!
//! Each controller mounts against the live document, owns its own slice of
//! DOM state and is kept alive by [`boot`] for the lifetime of the page.

#[macro_use]
mod logging;

pub mod anchors;
pub mod app_config;
pub mod backdrop;
pub mod boot;
mod dom;
pub mod error;
pub mod filter;
mod input;
pub mod menu;
pub mod name_tilt;
pub mod navbar;
pub mod reveal;
pub mod theme_store;

pub use boot::{mount_page, start, Page};
pub use error::MountError;
