//! Template-facing wrapper markup
//!
//! This module provides the two functions page templates call at render
//! time:
//! - [`BackgroundMarkup::open_wrapper`] - opening wrapper styled from the
//!   persisted background setting for a section
//! - [`close_wrapper`] - the matching closing tags
//!
//! Section ids pass through the same sanitizer as registration, so lookups
//! always hit the keys the registrar created.

pub(crate) mod html;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::customizer::api::SettingsStore;
use crate::sanitize::sanitize_name;

/// Which of a section's two background settings a wrapper is styled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Color,
    Image,
}

impl BackgroundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundKind::Color => "color",
            BackgroundKind::Image => "image",
        }
    }

    /// Lenient parse used at template call sites: `"image"` selects the
    /// image wrapper, anything else the color wrapper.
    pub fn parse(s: &str) -> Self {
        if s == "image" {
            BackgroundKind::Image
        } else {
            BackgroundKind::Color
        }
    }
}

/// Build the persisted-setting key for a sanitized section id.
///
/// Shared by the registrar and the emitter; `section_id` must already be
/// sanitized.
pub fn setting_key(prefix: &str, section_id: &str, kind: BackgroundKind) -> String {
    format!("{prefix}setting_{section_id}_{}", kind.as_str())
}

/// Default parallax data attributes on image wrappers, in emission order.
const IMAGE_DATA_DEFAULTS: &[(&str, &str)] =
    &[("speed", "0.1"), ("parallax", "scroll"), ("position", "0px 0px")];

/// Emits background wrapper markup from persisted settings.
///
/// Constructed with the same base id the [`BackgroundRegistrar`] was given,
/// so both derive identical setting keys.
///
/// [`BackgroundRegistrar`]: crate::customizer::BackgroundRegistrar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMarkup {
    setting_prefix: String,
}

impl BackgroundMarkup {
    pub fn new(base_id: &str) -> Self {
        Self {
            setting_prefix: format!("{}_", sanitize_name(base_id)),
        }
    }

    pub fn setting_prefix(&self) -> &str {
        &self.setting_prefix
    }

    /// Emit the opening wrapper for a section's background: two opening
    /// `<div>` tags, styled from the stored setting value.
    ///
    /// For [`BackgroundKind::Color`] the outer element carries an inline
    /// `background-color` style. For [`BackgroundKind::Image`] it carries the
    /// sanitized section id plus one `data-*` attribute per entry in the
    /// default parallax set (`speed`, `parallax`, `position`, `image-src`),
    /// with `extra` entries overriding defaults by key and unknown keys
    /// appended.
    ///
    /// A missing stored value renders as an empty style/attribute, never an
    /// error.
    pub fn open_wrapper(
        &self,
        store: &dyn SettingsStore,
        section_id: &str,
        kind: BackgroundKind,
        extra: &[(&str, &str)],
    ) -> String {
        let sid = sanitize_name(section_id);
        let key = setting_key(&self.setting_prefix, &sid, kind);
        let value = store.get(&key).unwrap_or_default();
        debug!(key = %key, kind = kind.as_str(), "emitting background wrapper");

        let mut out = String::new();
        match kind {
            BackgroundKind::Color => {
                let style = format!("background-color:{value}");
                html::push_open_tag(
                    &mut out,
                    "div",
                    &[("class", "parallax-window"), ("style", &style)],
                );
            }
            BackgroundKind::Image => {
                let mut data: Vec<(String, String)> = IMAGE_DATA_DEFAULTS
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                data.push(("image-src".to_string(), value));

                for (name, value) in extra {
                    match data.iter_mut().find(|(k, _)| k == name) {
                        Some(entry) => entry.1 = value.to_string(),
                        None => data.push((name.to_string(), value.to_string())),
                    }
                }

                out.push_str("<div");
                html::push_attr(&mut out, "id", &sid);
                html::push_attr(&mut out, "class", "fullwidth parallax-widget-areas parallax-window");
                for (key, value) in &data {
                    html::push_attr(&mut out, &format!("data-{key}"), value);
                }
                out.push('>');
            }
        }
        html::push_open_tag(&mut out, "div", &[("class", "wrap")]);
        out
    }
}

/// Closing tags balancing any [`BackgroundMarkup::open_wrapper`] output.
/// Context-free: no parameters, no store lookup.
pub fn close_wrapper() -> &'static str {
    "</div></div>"
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
