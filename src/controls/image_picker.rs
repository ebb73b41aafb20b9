//! Background image picker control
//!
//! Thin descriptor for the file-picker control the registrar binds to image
//! settings. The actual media-library chooser belongs to the host platform;
//! this control renders the bound input and the button that opens it.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::CustomizeControl;
use crate::markup::html;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePickerControl {
    pub id: String,
    pub setting: String,
    pub section: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl CustomizeControl for ImagePickerControl {
    fn control_type(&self) -> &'static str {
        "image"
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

        html::push_void_tag(
            &mut out,
            "input",
            &[
                ("class", "upload-image-control"),
                ("type", "text"),
                ("data-customize-setting-link", &self.setting),
            ],
        );
        html::push_element(
            &mut out,
            "button",
            &[("type", "button"), ("class", "button upload-button")],
            "Select image",
        );
        out.push_str("</label>");

        out
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "type": self.control_type(),
            "id": self.id,
            "setting": self.setting,
            "section": self.section,
            "label": self.label,
            "description": self.description,
        })
    }
}
