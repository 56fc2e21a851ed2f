//! The style document object model.
//!
//! Typed per the Mapbox GL style specification
//! (<https://docs.mapbox.com/mapbox-gl-js/style-spec/>). Properties that
//! accept either a constant or an expression are modeled as
//! [`PropertyValue`]; every optional property serializes only when set,
//! so partial documents round-trip unchanged through create and update.

use crate::base::Point;
use serde::{Deserialize, Serialize};

/// A style property value: a constant, or an expression tree encoded as
/// a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// An expression such as `["interpolate", ["linear"], ["zoom"], ...]`
    /// or a literal array value.
    Expression(Vec<serde_json::Value>),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// Reference frame for anchored properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Map,
    Viewport,
}

/// Rendering kind of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    Fill,
    Line,
    Symbol,
    Circle,
    Heatmap,
    FillExtrusion,
    Raster,
    Hillshade,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Visible,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineJoin {
    Bevel,
    Round,
    Miter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolPlacement {
    Point,
    Line,
    LineCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolZOrder {
    Auto,
    ViewportY,
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Map,
    Viewport,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTextFit {
    None,
    Width,
    Height,
    Both,
}

/// Anchor position of an icon or text label relative to its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableAnchor {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    Auto,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritingMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resampling {
    Linear,
    Nearest,
}

/// Global light source applied to extruded geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Light {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Radial, azimuthal and polar position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<f64>>,
}

/// Default property transition timing in milliseconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

/// Layout properties: placement decisions made before rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_sort_key: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_join: Option<LineJoin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_miter_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_round_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_sort_key: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_placement: Option<SymbolPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_avoid_edges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_sort_key: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_z_order: Option<SymbolZOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_allow_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_ignore_placement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_rotation_alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text_fit: Option<IconTextFit>,
    /// Sprite name or expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_keep_upright: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_offset: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<VariableAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_pitch_alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_pitch_alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_rotation_alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_justify: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_radial_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_variable_anchor: Option<Vec<VariableAnchor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_anchor: Option<VariableAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_max_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_writing_mode: Option<Vec<WritingMode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_keep_upright: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_offset: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_allow_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_ignore_placement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_sort_key: Option<f64>,
}

/// Paint properties: rendering decisions applied per frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Paint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_pattern: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_antialias: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_pattern: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_gap_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dasharray: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_pattern: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_gradient: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_halo_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_halo_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_halo_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_halo_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_halo_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_halo_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_hue_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_brightness_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_brightness_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_resampling: Option<Resampling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster_fade_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_pitch_scale: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_pitch_alignment: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_translate_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_pattern: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_extrusion_vertical_gradient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_intensity: Option<f64>,
    /// Expression-only property: the color ramp of the heatmap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_color: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_illumination_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_illumination_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_exaggeration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_highlight_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hillshade_accent_color: Option<String>,
}

/// One layer of a style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "source-layer", skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f64>,
    /// Feature filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint: Option<Paint>,
}

impl Layer {
    /// Creates a bare layer with all optional properties unset.
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
            metadata: None,
            source: None,
            source_layer: None,
            minzoom: None,
            maxzoom: None,
            filter: None,
            layout: None,
            paint: None,
        }
    }
}

/// A complete style document.
///
/// `sources` is kept as raw JSON: source definitions vary by kind
/// (vector, raster, GeoJSON, image, video) and the client does not
/// interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Style specification version; always 8.
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Default map center as `[lng, lat]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Light>,
    #[serde(default)]
    pub sources: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Account that owns the style; set by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

fn default_version() -> u32 {
    8
}

impl Default for Style {
    fn default() -> Self {
        Self {
            version: default_version(),
            id: None,
            name: None,
            metadata: None,
            center: None,
            zoom: None,
            bearing: None,
            pitch: None,
            light: None,
            sources: serde_json::Map::new(),
            sprite: None,
            glyphs: None,
            transition: None,
            layers: Vec::new(),
            owner: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_value_decodes_each_shape() {
        let constant: PropertyValue = serde_json::from_str(r##""#ff0000""##).unwrap();
        assert_eq!(constant, PropertyValue::String("#ff0000".to_string()));

        let number: PropertyValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(number, PropertyValue::Number(2.5));

        let expression: PropertyValue =
            serde_json::from_str(r#"["get", "height"]"#).unwrap();
        match expression {
            PropertyValue::Expression(parts) => {
                assert_eq!(parts[0], json!("get"));
                assert_eq!(parts[1], json!("height"));
            }
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn enum_values_use_spec_names() {
        assert_eq!(serde_json::to_string(&Anchor::Viewport).unwrap(), r#""viewport""#);
        assert_eq!(
            serde_json::to_string(&LayerType::FillExtrusion).unwrap(),
            r#""fill-extrusion""#
        );
        assert_eq!(
            serde_json::to_string(&SymbolZOrder::ViewportY).unwrap(),
            r#""viewport-y""#
        );
        assert_eq!(
            serde_json::to_string(&VariableAnchor::BottomRight).unwrap(),
            r#""bottom-right""#
        );
    }

    #[test]
    fn unset_properties_are_omitted() {
        let layer = Layer::new("water", LayerType::Fill);
        let json = serde_json::to_value(&layer).unwrap();

        assert_eq!(json, json!({"id": "water", "type": "fill"}));
    }

    #[test]
    fn layout_and_paint_use_kebab_case_keys() {
        let layout = Layout {
            line_cap: Some(LineCap::Round),
            text_max_width: Some(10.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json, json!({"line-cap": "round", "text-max-width": 10.0}));

        let paint = Paint {
            fill_color: Some("#0000ff".to_string()),
            line_dasharray: Some(vec![2.0, 1.0]),
            ..Default::default()
        };
        let json = serde_json::to_value(&paint).unwrap();
        assert_eq!(
            json,
            json!({"fill-color": "#0000ff", "line-dasharray": [2.0, 1.0]})
        );
    }

    #[test]
    fn style_document_roundtrips() {
        let document = json!({
            "version": 8,
            "id": "ck3pnytqh4h441ckyvch3pfo7",
            "name": "Basic",
            "center": [-77.050636, 38.889248],
            "zoom": 12.5,
            "sources": {
                "mapbox": {"type": "vector", "url": "mapbox://mapbox.mapbox-streets-v8"}
            },
            "sprite": "mapbox://sprites/user/ck3pnytqh",
            "glyphs": "mapbox://fonts/user/{fontstack}/{range}.pbf",
            "layers": [
                {"id": "background", "type": "background",
                 "paint": {"background-color": "#eeeeee"}},
                {"id": "water", "type": "fill", "source": "mapbox",
                 "source-layer": "water",
                 "filter": ["==", "class", "ocean"],
                 "paint": {"fill-color": "#73b6e6", "fill-opacity": 0.8}}
            ],
            "owner": "user"
        });

        let style: Style = serde_json::from_value(document.clone()).unwrap();
        assert_eq!(style.version, 8);
        assert_eq!(style.name.as_deref(), Some("Basic"));
        assert_eq!(style.center, Some(Point(-77.050636, 38.889248)));
        assert_eq!(style.layers.len(), 2);
        assert_eq!(style.layers[1].layer_type, LayerType::Fill);
        assert_eq!(
            style.layers[1]
                .paint
                .as_ref()
                .and_then(|p| p.fill_opacity),
            Some(0.8)
        );
        assert!(matches!(
            style.layers[1].filter,
            Some(PropertyValue::Expression(_))
        ));

        // Round-trip preserves the document exactly.
        assert_eq!(serde_json::to_value(&style).unwrap(), document);
    }

    #[test]
    fn version_defaults_to_8() {
        let style: Style = serde_json::from_str(r#"{"sources": {}, "layers": []}"#).unwrap();
        assert_eq!(style.version, 8);
        assert_eq!(Style::default().version, 8);
    }
}
