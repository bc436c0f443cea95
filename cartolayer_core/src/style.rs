// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration objects.
//!
//! These are the plain values a layer panel hands over: colors as opaque
//! strings, widths and radii as numbers, zoom bounds as integers, and
//! opacity as an integer percentage. Field names deserialize in camelCase,
//! so the panel's JSON maps onto them directly:
//!
//! ```
//! use cartolayer_core::style::LineStyle;
//!
//! let style: LineStyle = serde_json::from_str(
//!     r#"{"sourceId": "roads", "color": "red", "width": 2, "opacity": 60,
//!         "minZoom": 2, "maxZoom": 10, "visibility": "visible"}"#,
//! )
//! .unwrap();
//! assert_eq!(style.base.opacity.fraction(), 0.6);
//! ```
//!
//! Each config knows how it maps onto [`LayerProperty`] writes; the
//! operations in [`ops`](crate::ops) use the same list for add and update.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layer::{LayerProperty, LayoutProperty, PaintProperty, Visibility, ZoomRange};

/// Layer opacity as an integer percentage, clamped to `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Opacity(u8);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(100);

    /// Creates an opacity from a percentage, clamping values above 100.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        if percent > 100 { Self(100) } else { Self(percent) }
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Returns the opacity as the fraction `percent / 100` engines expect.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub(crate) fn value(self) -> Value {
        Value::from(self.fraction())
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl From<u8> for Opacity {
    fn from(percent: u8) -> Self {
        Self::from_percent(percent)
    }
}

impl From<Opacity> for u8 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

const fn default_max_zoom() -> u8 {
    22
}

/// Fields every vector-layer config shares.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerBase {
    /// Source the layers draw from; layer ids derive from it.
    pub source_id: String,
    /// Visibility of every layer built from the config.
    #[serde(default)]
    pub visibility: Visibility,
    /// Lowest zoom at which the layers are drawn.
    #[serde(default)]
    pub min_zoom: u8,
    /// Highest zoom at which the layers are drawn.
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    /// Opacity percentage.
    #[serde(default)]
    pub opacity: Opacity,
}

impl LayerBase {
    /// Creates a visible, opaque base over zooms `0..=22`.
    #[must_use]
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            visibility: Visibility::Visible,
            min_zoom: 0,
            max_zoom: default_max_zoom(),
            opacity: Opacity::OPAQUE,
        }
    }

    /// Returns the zoom bounds.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        ZoomRange::new(self.min_zoom, self.max_zoom)
    }

    fn common_properties(&self) -> [LayerProperty; 2] {
        [
            LayerProperty::Visibility(self.visibility),
            LayerProperty::ZoomRange(self.zoom_range()),
        ]
    }
}

/// Point features as circles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LayerBase,
    /// Circle fill color.
    pub fill_color: String,
    /// Stroke color.
    pub outline_color: String,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Stroke width in pixels.
    pub width: f64,
}

impl CircleStyle {
    /// Returns every property the circle layer carries.
    #[must_use]
    pub fn properties(&self) -> Vec<LayerProperty> {
        let mut props = self.base.common_properties().to_vec();
        props.extend([
            LayerProperty::Paint(PaintProperty::CircleOpacity, self.base.opacity.value()),
            LayerProperty::Paint(PaintProperty::CircleColor, self.fill_color.as_str().into()),
            LayerProperty::Paint(
                PaintProperty::CircleStrokeColor,
                self.outline_color.as_str().into(),
            ),
            LayerProperty::Paint(PaintProperty::CircleStrokeWidth, self.width.into()),
            LayerProperty::Paint(PaintProperty::CircleRadius, self.radius.into()),
        ]);
        props
    }
}

/// Line features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LayerBase,
    /// Line color.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
}

impl LineStyle {
    /// Returns every property the line layer carries.
    #[must_use]
    pub fn properties(&self) -> Vec<LayerProperty> {
        let mut props = self.base.common_properties().to_vec();
        props.extend([
            LayerProperty::Paint(PaintProperty::LineOpacity, self.base.opacity.value()),
            LayerProperty::Paint(PaintProperty::LineColor, self.color.as_str().into()),
            LayerProperty::Paint(PaintProperty::LineWidth, self.width.into()),
        ]);
        props
    }
}

/// Polygon features as a fill plus an outline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStyle {
    /// Shared fields, applied to both layers.
    #[serde(flatten)]
    pub base: LayerBase,
    /// Interior color.
    pub fill_color: String,
    /// Outline color.
    pub outline_color: String,
    /// Outline width in pixels.
    pub width: f64,
}

impl PolygonStyle {
    /// Returns every property the fill layer carries.
    #[must_use]
    pub fn fill_properties(&self) -> Vec<LayerProperty> {
        let mut props = self.base.common_properties().to_vec();
        props.extend([
            LayerProperty::Paint(PaintProperty::FillOpacity, self.base.opacity.value()),
            LayerProperty::Paint(PaintProperty::FillColor, self.fill_color.as_str().into()),
        ]);
        props
    }

    /// Returns every property the outline layer carries.
    #[must_use]
    pub fn outline_properties(&self) -> Vec<LayerProperty> {
        let mut props = self.base.common_properties().to_vec();
        props.extend([
            LayerProperty::Paint(PaintProperty::LineOpacity, self.base.opacity.value()),
            LayerProperty::Paint(PaintProperty::LineColor, self.outline_color.as_str().into()),
            LayerProperty::Paint(PaintProperty::LineWidth, self.width.into()),
        ]);
        props
    }
}

/// Where a label's text comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    /// The same literal text on every feature.
    #[default]
    Fixed,
    /// Text taken from a feature property.
    ByField,
}

/// Labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStyle {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LayerBase,
    /// Which of the two text fields is used.
    pub text_type: TextType,
    /// Literal label text.
    #[serde(default)]
    pub text_by_fixed: String,
    /// Feature property (or expression) providing the label text.
    #[serde(default)]
    pub text_by_field: String,
    /// Font stack.
    pub text_font: Vec<String>,
    /// Font size in pixels.
    pub text_size: f64,
    /// Text color.
    pub text_color: String,
    /// Halo width in pixels.
    pub symbol_border_width: f64,
    /// Halo color.
    pub symbol_border_color: String,
}

impl SymbolStyle {
    /// Resolves the label text: `text_by_fixed` for [`TextType::Fixed`],
    /// otherwise `text_by_field`.
    #[must_use]
    pub fn text_field(&self) -> &str {
        match self.text_type {
            TextType::Fixed => &self.text_by_fixed,
            TextType::ByField => &self.text_by_field,
        }
    }

    /// Returns every property the symbol layer carries.
    #[must_use]
    pub fn properties(&self) -> Vec<LayerProperty> {
        let mut props = self.base.common_properties().to_vec();
        props.extend([
            LayerProperty::Layout(LayoutProperty::TextField, self.text_field().into()),
            LayerProperty::Layout(LayoutProperty::TextFont, self.text_font.clone().into()),
            LayerProperty::Layout(LayoutProperty::TextSize, self.text_size.into()),
            LayerProperty::Paint(PaintProperty::TextOpacity, self.base.opacity.value()),
            LayerProperty::Paint(PaintProperty::TextColor, self.text_color.as_str().into()),
            LayerProperty::Paint(PaintProperty::TextHaloWidth, self.symbol_border_width.into()),
            LayerProperty::Paint(
                PaintProperty::TextHaloColor,
                self.symbol_border_color.as_str().into(),
            ),
        ]);
        props
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn opacity_is_a_fraction_of_the_percentage() {
        for percent in [0_u8, 1, 35, 60, 80, 100] {
            assert_eq!(
                Opacity::from_percent(percent).fraction(),
                f64::from(percent) / 100.0,
                "percent {percent}"
            );
        }
        assert_eq!(Opacity::from_percent(60).fraction(), 0.6);
    }

    #[test]
    fn opacity_clamps_above_one_hundred() {
        assert_eq!(Opacity::from_percent(140), Opacity::OPAQUE);
        let parsed: Opacity = serde_json::from_value(json!(250)).unwrap();
        assert_eq!(parsed.percent(), 100);
    }

    #[test]
    fn circle_config_from_panel_json() {
        let style: CircleStyle = serde_json::from_value(json!({
            "maxZoom": 10,
            "minZoom": 2,
            "opacity": 60,
            "outlineColor": "green",
            "radius": 10,
            "sourceId": "geojson-source",
            "visibility": "visible",
            "width": 2,
            "fillColor": "red"
        }))
        .unwrap();

        assert_eq!(style.base.source_id, "geojson-source");
        assert_eq!(style.base.zoom_range(), ZoomRange::new(2, 10));
        assert_eq!(style.base.opacity.percent(), 60);
        assert_eq!(style.radius, 10.0);
        assert_eq!(style.fill_color, "red");
    }

    #[test]
    fn missing_base_fields_take_defaults() {
        let style: LineStyle = serde_json::from_value(json!({
            "sourceId": "roads",
            "color": "#333",
            "width": 1.5
        }))
        .unwrap();
        assert_eq!(style.base, LayerBase::new("roads"));
    }

    #[test]
    fn symbol_text_type_selects_text() {
        let mut style: SymbolStyle = serde_json::from_value(json!({
            "sourceId": "cities",
            "textType": "fixed",
            "textByFixed": "test text",
            "textByField": "name_by_field",
            "textFont": ["Noto Sans Regular"],
            "textSize": 12,
            "textColor": "#af938a",
            "symbolBorderWidth": 2,
            "symbolBorderColor": "#D6BF57"
        }))
        .unwrap();
        assert_eq!(style.text_field(), "test text");

        style.text_type = TextType::ByField;
        assert_eq!(style.text_field(), "name_by_field");
        assert!(
            style.properties().contains(&LayerProperty::Layout(
                LayoutProperty::TextField,
                json!("name_by_field")
            )),
            "text-field should follow the text type"
        );
    }

    #[test]
    fn polygon_layers_share_base_properties() {
        let style = PolygonStyle {
            base: LayerBase {
                opacity: Opacity::from_percent(40),
                ..LayerBase::new("parcels")
            },
            fill_color: "red".into(),
            outline_color: "green".into(),
            width: 2.0,
        };
        let fill = style.fill_properties();
        let outline = style.outline_properties();
        assert_eq!(fill[..2], outline[..2]);
        assert!(
            outline.contains(&LayerProperty::Paint(PaintProperty::LineColor, json!("green"))),
            "outline color goes to line-color"
        );
    }
}
