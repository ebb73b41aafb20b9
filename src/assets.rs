//! Bundled front-end asset descriptors
//!
//! This crate ships two opaque front-end assets: the parallax scrolling
//! script applied to image wrappers, and the alpha color picker script/style
//! pair used inside the customization preview. Here live their handles,
//! paths, and version literals; actual loading goes through the host's
//! [`AssetPipeline`] port.

use tracing::debug;

use crate::customizer::api::AssetPipeline;

pub const ASSET_VERSION: &str = "1.0.0";

pub const PARALLAX_HANDLE: &str = "parallax";
pub const COLOR_PICKER_HANDLE: &str = "alpha-color-picker";

/// Picker assets, relative to the add-on's asset base. The host resolves
/// them against its theme URI when enqueueing.
pub const COLOR_PICKER_SCRIPT: &str = "lib/js/alpha-color-picker.js";
pub const COLOR_PICKER_STYLE: &str = "lib/css/alpha-color-picker.css";

/// Wrapper around the bundled parallax scrolling script.
///
/// The script itself is an opaque asset; this type only knows its handle,
/// source URL, and dependency list. It is enqueued for normal page views
/// (image wrappers need it), not just the preview session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallaxScript {
    base_url: String,
    debug: bool,
}

impl ParallaxScript {
    /// `base_url` points at the add-on's asset directory; `debug` selects
    /// the unminified bundle.
    pub fn new(base_url: impl Into<String>, debug: bool) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            debug,
        }
    }

    pub fn src(&self) -> String {
        let suffix = if self.debug { "" } else { ".min" };
        format!("{}/assets/js/jquery.parallax{suffix}.js", self.base_url)
    }

    pub fn enqueue(&self, assets: &mut dyn AssetPipeline) {
        let src = self.src();
        debug!(handle = PARALLAX_HANDLE, src = %src, "enqueueing parallax script");
        assets.enqueue_script(PARALLAX_HANDLE, &src, &["jquery"], ASSET_VERSION);
    }
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
