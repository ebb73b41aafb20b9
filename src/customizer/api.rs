//! Host-platform ports
//!
//! The settings store, UI registration API, asset pipeline, and preview
//! context guard are ambient globals on the host platform. Here they are
//! explicit collaborator traits injected into the registrar and emitter, so
//! tests can substitute recording fakes.

use std::fmt;

use crate::controls::CustomizeControl;

/// Validator attached to a setting: `(candidate, current) -> accepted`.
///
/// The current stored value is supplied so a rejected candidate can degrade
/// to it. The current value is treated as already trusted.
pub type SettingValidator = Box<dyn Fn(&str, &str) -> String>;

/// Arguments for registering a top-level panel grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelArgs {
    pub title: String,
    pub description: String,
    pub priority: u32,
}

/// Arguments for registering a section grouping under a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionArgs {
    pub title: String,
    pub panel: String,
}

/// Arguments for registering a persisted setting.
pub struct SettingArgs {
    pub default: String,
    pub validator: Option<SettingValidator>,
}

impl fmt::Debug for SettingArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingArgs")
            .field("default", &self.default)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Synchronous key-value access to the host platform's settings store.
///
/// This crate only constructs keys and supplies validators and defaults; it
/// never implements storage.
pub trait SettingsStore {
    /// Read a stored setting. `None` when nothing has been persisted yet.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a setting value.
    fn set(&mut self, key: &str, value: &str);
}

/// The host platform's UI registration surface.
pub trait CustomizeApi {
    fn add_panel(&mut self, id: &str, args: PanelArgs);
    fn add_section(&mut self, id: &str, args: SectionArgs);
    fn add_setting(&mut self, id: &str, args: SettingArgs);
    fn add_control(&mut self, control: Box<dyn CustomizeControl>);
}

/// The host platform's script/style enqueue mechanism.
pub trait AssetPipeline {
    fn enqueue_script(&mut self, handle: &str, src: &str, deps: &[&str], version: &str);
    fn enqueue_style(&mut self, handle: &str, src: &str, deps: &[&str], version: &str);
}

/// Guard distinguishing the live customization/preview session from a normal
/// visitor page view. Every registration path is gated on it.
pub trait CustomizeContext {
    fn is_preview(&self) -> bool;
}
