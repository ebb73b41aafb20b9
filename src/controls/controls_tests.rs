use super::*;
use crate::assets;
use crate::customizer::api::{AssetPipeline, CustomizeContext};

struct Preview(bool);

impl CustomizeContext for Preview {
    fn is_preview(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
struct RecordingAssets {
    scripts: Vec<(String, String, Vec<String>, String)>,
    styles: Vec<(String, String, Vec<String>, String)>,
}

impl AssetPipeline for RecordingAssets {
    fn enqueue_script(&mut self, handle: &str, src: &str, deps: &[&str], version: &str) {
        self.scripts.push((
            handle.to_string(),
            src.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
            version.to_string(),
        ));
    }

    fn enqueue_style(&mut self, handle: &str, src: &str, deps: &[&str], version: &str) {
        self.styles.push((
            handle.to_string(),
            src.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
            version.to_string(),
        ));
    }
}

fn alpha_control() -> AlphaColorControl {
    AlphaColorControl {
        id: "hero_color".to_string(),
        setting: "base_setting_hero_color".to_string(),
        section: "base_hero".to_string(),
        label: "Background Color".to_string(),
        description: "Pick a color".to_string(),
        default_color: "#1e1e1e".to_string(),
        palette: Palette::default(),
        show_opacity: true,
    }
}

#[test]
fn test_alpha_render_data_attributes() {
    let markup = alpha_control().render_content();

    assert!(markup.contains("class='alpha-color-control'"));
    assert!(markup.contains("data-show-opacity='true'"));
    assert!(markup.contains("data-palette='true'"));
    assert!(markup.contains("data-default-color='#1e1e1e'"));
    assert!(markup.contains("data-customize-setting-link='base_setting_hero_color'"));
}

#[test]
fn test_alpha_render_label_and_description() {
    let markup = alpha_control().render_content();

    assert!(markup.contains("<span class='customize-control-title'>Background Color</span>"));
    assert!(markup
        .contains("<span class='description customize-control-description'>Pick a color</span>"));
}

#[test]
fn test_alpha_render_skips_empty_label() {
    let mut control = alpha_control();
    control.label = String::new();
    control.description = String::new();

    let markup = control.render_content();
    assert!(!markup.contains("customize-control-title"));
    assert!(!markup.contains("customize-control-description"));
}

#[test]
fn test_palette_attribute_variants() {
    let mut control = alpha_control();

    control.palette = Palette::Enabled(false);
    assert!(control.render_content().contains("data-palette='false'"));

    control.palette = Palette::Colors(vec![
        "#000000".to_string(),
        "#ffffff".to_string(),
        "rgba(0,0,0,0.5)".to_string(),
    ]);
    assert!(control
        .render_content()
        .contains("data-palette='#000000|#ffffff|rgba(0,0,0,0.5)'"));
}

#[test]
fn test_user_text_is_escaped() {
    let mut control = alpha_control();
    control.label = "<script>alert(1)</script>".to_string();
    control.default_color = "x' onmouseover='steal()".to_string();

    let markup = control.render_content();
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
    assert!(!markup.contains("onmouseover='steal()"));
}

#[test]
fn test_render_gated_on_preview_context() {
    let control = alpha_control();

    assert!(control.render(&Preview(false)).is_empty());
    assert!(!control.render(&Preview(true)).is_empty());
}

#[test]
fn test_enqueue_gated_on_preview_context() {
    let control = alpha_control();
    let mut recorded = RecordingAssets::default();

    control.enqueue(&Preview(false), &mut recorded);
    assert!(recorded.scripts.is_empty());
    assert!(recorded.styles.is_empty());

    control.enqueue(&Preview(true), &mut recorded);
    assert_eq!(recorded.scripts.len(), 1);
    assert_eq!(recorded.styles.len(), 1);

    let (handle, src, deps, version) = &recorded.scripts[0];
    assert_eq!(handle, assets::COLOR_PICKER_HANDLE);
    assert_eq!(src, assets::COLOR_PICKER_SCRIPT);
    assert_eq!(deps, &["jquery", "color-picker"]);
    assert_eq!(version, assets::ASSET_VERSION);
}

#[test]
fn test_alpha_to_json() {
    let json = alpha_control().to_json();

    assert_eq!(json["type"], "alpha-color");
    assert_eq!(json["setting"], "base_setting_hero_color");
    assert_eq!(json["showOpacity"], true);
    assert_eq!(json["palette"], true);
}

#[test]
fn test_alpha_deserializes_with_defaults() {
    let control: AlphaColorControl = serde_json::from_str(
        r##"{
            "id": "hero_color",
            "setting": "base_setting_hero_color",
            "section": "base_hero",
            "palette": ["#000", "#fff"]
        }"##,
    )
    .unwrap();

    assert_eq!(
        control.palette,
        Palette::Colors(vec!["#000".to_string(), "#fff".to_string()])
    );
    assert!(control.show_opacity);
    assert!(control.label.is_empty());
}

#[test]
fn test_image_picker_render() {
    let control = ImagePickerControl {
        id: "hero_image".to_string(),
        setting: "base_setting_hero_image".to_string(),
        section: "base_hero".to_string(),
        label: "Background Image".to_string(),
        description: String::new(),
    };

    let markup = control.render_content();
    assert!(markup.contains("class='upload-image-control'"));
    assert!(markup.contains("data-customize-setting-link='base_setting_hero_image'"));
    assert!(markup.contains(">Select image</button>"));

    assert_eq!(control.control_type(), "image");
    assert_eq!(control.to_json()["type"], "image");
}

#[test]
fn test_image_picker_enqueues_nothing() {
    let control = ImagePickerControl {
        id: "hero_image".to_string(),
        setting: "base_setting_hero_image".to_string(),
        section: "base_hero".to_string(),
        label: String::new(),
        description: String::new(),
    };
    let mut recorded = RecordingAssets::default();

    control.enqueue(&Preview(true), &mut recorded);
    assert!(recorded.scripts.is_empty());
    assert!(recorded.styles.is_empty());
}
