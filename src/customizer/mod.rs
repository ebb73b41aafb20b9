//! Background customizer registration
//!
//! This module provides:
//! - `api` - injected collaborator traits for the host platform (settings
//!   store, UI registration, asset pipeline, preview context guard)
//! - `registrar` - the background section registrar driving those ports
//!
//! # Module Structure
//!
//! - `api` - port trait and argument type definitions
//! - `registrar` - `BackgroundRegistrar` and `SectionDescriptor`

pub mod api;
mod registrar;

pub use registrar::{BackgroundRegistrar, SectionDescriptor};

#[cfg(test)]
#[path = "registrar_tests.rs"]
mod tests;
