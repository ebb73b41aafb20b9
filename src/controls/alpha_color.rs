//! Alpha color picker control
//!
//! Extends the platform's native color control with an opacity slider. The
//! control itself is markup only; the opacity math and RGBa/hex conversion
//! live in the paired front-end script, which is treated as an opaque asset.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::CustomizeControl;
use crate::assets;
use crate::customizer::api::AssetPipeline;
use crate::markup::html;

/// Swatch palette configuration for the alpha color picker.
///
/// Serializes the way the front-end script expects it: a bool (native
/// default palette on/off) or an explicit ordered swatch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Palette {
    Enabled(bool),
    Colors(Vec<String>),
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Enabled(true)
    }
}

impl Palette {
    /// Value of the `data-palette` attribute: pipe-joined swatch list, else
    /// literal `"true"`/`"false"`.
    fn data_value(&self) -> String {
        match self {
            Palette::Enabled(true) => "true".to_string(),
            Palette::Enabled(false) => "false".to_string(),
            Palette::Colors(colors) => colors.join("|"),
        }
    }
}

/// Text input styled as a color+opacity picker by the paired script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaColorControl {
    pub id: String,
    pub setting: String,
    pub section: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_color: String,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default = "default_show_opacity")]
    pub show_opacity: bool,
}

fn default_show_opacity() -> bool {
    true
}

impl CustomizeControl for AlphaColorControl {
    fn control_type(&self) -> &'static str {
        "alpha-color"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn setting(&self) -> &str {
        &self.setting
    }

    fn section(&self) -> &str {
        &self.section
    }

    fn render_content(&self) -> String {
        let mut out = String::new();

        if !self.label.is_empty() {
            html::push_element(
                &mut out,
                "span",
                &[("class", "customize-control-title")],
                &self.label,
            );
        }

        out.push_str("<label>");
        if !self.description.is_empty() {
            html::push_element(
                &mut out,
                "span",
                &[("class", "description customize-control-description")],
                &self.description,
            );
        }

        let show_opacity = if self.show_opacity { "true" } else { "false" };
        let palette = self.palette.data_value();
        html::push_void_tag(
            &mut out,
            "input",
            &[
                ("class", "alpha-color-control"),
                ("type", "text"),
                ("data-show-opacity", show_opacity),
                ("data-palette", &palette),
                ("data-default-color", &self.default_color),
                // Two-way binding with the host's live preview pane.
                ("data-customize-setting-link", &self.setting),
            ],
        );
        out.push_str("</label>");

        out
    }

    fn enqueue_assets(&self, assets_out: &mut dyn AssetPipeline) {
        assets_out.enqueue_script(
            assets::COLOR_PICKER_HANDLE,
            assets::COLOR_PICKER_SCRIPT,
            &["jquery", "color-picker"],
            assets::ASSET_VERSION,
        );
        assets_out.enqueue_style(
            assets::COLOR_PICKER_HANDLE,
            assets::COLOR_PICKER_STYLE,
            &["color-picker"],
            assets::ASSET_VERSION,
        );
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "type": self.control_type(),
            "id": self.id,
            "setting": self.setting,
            "section": self.section,
            "label": self.label,
            "description": self.description,
            "defaultColor": self.default_color,
            "palette": self.palette,
            "showOpacity": self.show_opacity,
        })
    }
}
