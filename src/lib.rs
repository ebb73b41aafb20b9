//! Parallax Backgrounds - per-section background customization add-on
//!
//! This library registers theme-customizer controls that let a site
//! administrator pick a background color or image per content section, and
//! exposes the two helpers templates call to emit wrapper markup styled with
//! the chosen background. It also defines an alpha color picker control that
//! extends the platform's native color control with an opacity channel.
//!
//! The host platform's settings store, UI registration API, asset pipeline,
//! and preview-context guard are consumed through injected traits in
//! [`customizer::api`], so the whole surface runs against fakes in tests.
//!
//! # Module Structure
//!
//! - `sanitize` - label-to-identifier normalization shared by registration
//!   and rendering
//! - `validate` - background image extension allow-list
//! - `customizer` - port traits and the background section registrar
//! - `controls` - alpha color picker and image picker control descriptors
//! - `markup` - template-facing wrapper emission
//! - `assets` - bundled parallax/picker asset descriptors
//! - `error` - input-contract violation errors
//! - `logging` - stderr subscriber setup for host binaries and tests

pub mod assets;
pub mod controls;
pub mod customizer;
pub mod error;
pub mod logging;
pub mod markup;
pub mod sanitize;
pub mod validate;

// Re-export the surface host code and templates touch.
pub use controls::{AlphaColorControl, CustomizeControl, ImagePickerControl, Palette};
pub use customizer::api::{
    AssetPipeline, CustomizeApi, CustomizeContext, PanelArgs, SectionArgs, SettingArgs,
    SettingValidator, SettingsStore,
};
pub use customizer::{BackgroundRegistrar, SectionDescriptor};
pub use error::CustomizeError;
pub use markup::{close_wrapper, BackgroundKind, BackgroundMarkup};
