//! Customizer control descriptors
//!
//! Controls are the widgets bound to settings in the customization UI. The
//! host platform owns the rendering pipeline; this crate only describes each
//! control and produces its inner markup. Rendering and asset enqueueing are
//! gated on the preview context so edit-only scripts and styles never leak
//! into normal page views.

mod alpha_color;
mod image_picker;

pub use alpha_color::{AlphaColorControl, Palette};
pub use image_picker::ImagePickerControl;

use crate::customizer::api::{AssetPipeline, CustomizeContext};

/// A control descriptor the registrar hands to the host's UI registration
/// API.
pub trait CustomizeControl {
    /// Control type identifier the preview pane dispatches on.
    fn control_type(&self) -> &'static str;

    fn id(&self) -> &str;

    /// Key of the setting this control edits.
    fn setting(&self) -> &str;

    /// Key of the section grouping this control sits in.
    fn section(&self) -> &str;

    /// Render the control's inner markup. All user-supplied text is escaped.
    fn render_content(&self) -> String;

    /// Enqueue edit-session scripts and styles. Default: none.
    fn enqueue_assets(&self, _assets: &mut dyn AssetPipeline) {}

    /// Export the control's parameters for the preview pane.
    fn to_json(&self) -> serde_json::Value;

    /// Guarded render: outside the live preview session the control emits
    /// nothing.
    fn render(&self, ctx: &dyn CustomizeContext) -> String {
        if !ctx.is_preview() {
            return String::new();
        }
        self.render_content()
    }

    /// Guarded enqueue: outside the live preview session no assets are
    /// registered.
    fn enqueue(&self, ctx: &dyn CustomizeContext, assets: &mut dyn AssetPipeline) {
        if !ctx.is_preview() {
            return;
        }
        self.enqueue_assets(assets);
    }
}

#[cfg(test)]
#[path = "controls_tests.rs"]
mod tests;
