//! Background section registration
//!
//! The registrar owns the registration context (sanitized base id, setting
//! prefix, sorted section list) and drives the host's UI registration API:
//! one top-level panel, then per section a sub-grouping with a color setting,
//! an image setting, and a control for each.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::controls::{AlphaColorControl, ImagePickerControl, Palette};
use crate::customizer::api::{
    CustomizeApi, CustomizeContext, PanelArgs, SectionArgs, SettingArgs,
};
use crate::error::CustomizeError;
use crate::markup::{setting_key, BackgroundKind};
use crate::sanitize::{sanitize_hex_color, sanitize_name};
use crate::validate::validate_image;

/// A content section that gets its own background settings.
///
/// `id` is an opaque caller-supplied key, unique across the list handed to
/// the registrar; `name` is the human-readable label shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub name: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

const PANEL_TITLE: &str = "Home Background Settings";
const PANEL_PRIORITY: u32 = 202;

/// Registers per-section background settings and controls.
#[derive(Debug)]
pub struct BackgroundRegistrar {
    raw_base_id: String,
    base_id: String,
    setting_prefix: String,
    sections: Vec<SectionDescriptor>,
}

impl BackgroundRegistrar {
    /// Build the registration context: sanitize the base id, derive the
    /// setting prefix, and sort sections ascending by id (stable, so
    /// malformed duplicate ids keep their original relative order).
    pub fn new(base_id: &str, mut sections: Vec<SectionDescriptor>) -> Self {
        sections.sort_by(|a, b| a.id.cmp(&b.id));
        let sanitized = sanitize_name(base_id);
        Self {
            raw_base_id: base_id.to_string(),
            setting_prefix: format!("{sanitized}_"),
            base_id: sanitized,
            sections,
        }
    }

    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    pub fn setting_prefix(&self) -> &str {
        &self.setting_prefix
    }

    /// Register the panel, sections, settings, and controls.
    ///
    /// Outside the customization preview this is a silent no-op: the API is
    /// never touched and normal page renders pay zero registration cost.
    /// Malformed section descriptors fail fast before any registration
    /// happens.
    pub fn register(
        &self,
        ctx: &dyn CustomizeContext,
        api: &mut dyn CustomizeApi,
    ) -> Result<(), CustomizeError> {
        if !ctx.is_preview() {
            debug!(panel = %self.base_id, "outside customization preview, skipping registration");
            return Ok(());
        }

        if self.base_id.is_empty() {
            return Err(CustomizeError::EmptyBaseId {
                base: self.raw_base_id.clone(),
            });
        }
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(CustomizeError::MissingSectionId {
                    name: section.name.clone(),
                });
            }
            if section.name.trim().is_empty() {
                return Err(CustomizeError::MissingSectionName {
                    id: section.id.clone(),
                });
            }
            // A degenerate id would collide every such section on the key
            // `{base}_` the same way a degenerate base id would.
            if sanitize_name(&section.id).is_empty() {
                return Err(CustomizeError::EmptySectionId {
                    id: section.id.clone(),
                });
            }
        }

        info!(
            panel = %self.base_id,
            sections = self.sections.len(),
            "registering background sections"
        );

        api.add_panel(
            &self.base_id,
            PanelArgs {
                title: PANEL_TITLE.to_string(),
                description: String::new(),
                priority: PANEL_PRIORITY,
            },
        );

        for section in &self.sections {
            self.register_section(api, section);
        }

        Ok(())
    }

    fn register_section(&self, api: &mut dyn CustomizeApi, section: &SectionDescriptor) {
        let sid = sanitize_name(&section.id);
        let section_key = format!("{}_{}", self.base_id, sid);
        debug!(section = %section_key, "registering background section");

        api.add_section(
            &section_key,
            SectionArgs {
                title: format!("Background for {}", section.name),
                panel: self.base_id.clone(),
            },
        );

        let color_setting = setting_key(&self.setting_prefix, &sid, BackgroundKind::Color);
        api.add_setting(
            &color_setting,
            SettingArgs {
                default: String::new(),
                validator: Some(Box::new(|candidate, current| {
                    sanitize_hex_color(candidate).unwrap_or_else(|| current.to_string())
                })),
            },
        );
        api.add_control(Box::new(AlphaColorControl {
            id: format!("{sid}_color"),
            setting: color_setting,
            section: section_key.clone(),
            label: "Background Color".to_string(),
            description: usage_hint(BackgroundKind::Color),
            default_color: String::new(),
            palette: Palette::default(),
            show_opacity: true,
        }));

        let image_setting = setting_key(&self.setting_prefix, &sid, BackgroundKind::Image);
        api.add_setting(
            &image_setting,
            SettingArgs {
                default: String::new(),
                validator: Some(Box::new(|candidate, current| {
                    validate_image(candidate, current)
                })),
            },
        );
        api.add_control(Box::new(ImagePickerControl {
            id: format!("{sid}_image"),
            setting: image_setting,
            section: section_key,
            label: "Background Image".to_string(),
            description: usage_hint(BackgroundKind::Image),
        }));
    }
}

/// Template-usage hint shown under each control.
fn usage_hint(kind: BackgroundKind) -> String {
    format!(
        "To use in a template: open_wrapper(\"widget-id\", \"{}\") ... close_wrapper()",
        kind.as_str()
    )
}
