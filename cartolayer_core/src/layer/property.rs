// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed style-property table.
//!
//! Every logical style field this crate writes has one variant here, and each
//! variant knows its style-document key. Handles translate the typed value
//! back into the engine's string-keyed setters at the boundary.

use serde_json::{Value, json};

use super::spec::{LayerType, Visibility, ZoomRange};

/// Paint properties written by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintProperty {
    /// `circle-color`
    CircleColor,
    /// `circle-opacity`
    CircleOpacity,
    /// `circle-radius`
    CircleRadius,
    /// `circle-stroke-color`
    CircleStrokeColor,
    /// `circle-stroke-width`
    CircleStrokeWidth,
    /// `line-color`
    LineColor,
    /// `line-opacity`
    LineOpacity,
    /// `line-width`
    LineWidth,
    /// `fill-color`
    FillColor,
    /// `fill-opacity`
    FillOpacity,
    /// `text-color`
    TextColor,
    /// `text-opacity`
    TextOpacity,
    /// `text-halo-color`
    TextHaloColor,
    /// `text-halo-width`
    TextHaloWidth,
    /// `background-opacity`
    BackgroundOpacity,
    /// `raster-opacity`
    RasterOpacity,
    /// `heatmap-opacity`
    HeatmapOpacity,
    /// `fill-extrusion-opacity`
    FillExtrusionOpacity,
    /// `color-relief-opacity`
    ColorReliefOpacity,
}

impl PaintProperty {
    /// Returns the style-document key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CircleColor => "circle-color",
            Self::CircleOpacity => "circle-opacity",
            Self::CircleRadius => "circle-radius",
            Self::CircleStrokeColor => "circle-stroke-color",
            Self::CircleStrokeWidth => "circle-stroke-width",
            Self::LineColor => "line-color",
            Self::LineOpacity => "line-opacity",
            Self::LineWidth => "line-width",
            Self::FillColor => "fill-color",
            Self::FillOpacity => "fill-opacity",
            Self::TextColor => "text-color",
            Self::TextOpacity => "text-opacity",
            Self::TextHaloColor => "text-halo-color",
            Self::TextHaloWidth => "text-halo-width",
            Self::BackgroundOpacity => "background-opacity",
            Self::RasterOpacity => "raster-opacity",
            Self::HeatmapOpacity => "heatmap-opacity",
            Self::FillExtrusionOpacity => "fill-extrusion-opacity",
            Self::ColorReliefOpacity => "color-relief-opacity",
        }
    }

    /// Returns the property that controls opacity for a layer type.
    ///
    /// Symbol layers fade through `text-opacity`. Hillshade layers have no
    /// opacity property.
    #[must_use]
    pub const fn opacity_for(layer_type: LayerType) -> Option<Self> {
        match layer_type {
            LayerType::Fill => Some(Self::FillOpacity),
            LayerType::Symbol => Some(Self::TextOpacity),
            LayerType::Line => Some(Self::LineOpacity),
            LayerType::Circle => Some(Self::CircleOpacity),
            LayerType::Background => Some(Self::BackgroundOpacity),
            LayerType::Raster => Some(Self::RasterOpacity),
            LayerType::Heatmap => Some(Self::HeatmapOpacity),
            LayerType::FillExtrusion => Some(Self::FillExtrusionOpacity),
            LayerType::ColorRelief => Some(Self::ColorReliefOpacity),
            LayerType::Hillshade => None,
        }
    }
}

/// Layout properties written by this crate (visibility has its own variant
/// in [`LayerProperty`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutProperty {
    /// `text-field`
    TextField,
    /// `text-font`
    TextFont,
    /// `text-size`
    TextSize,
}

impl LayoutProperty {
    /// Returns the style-document key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TextField => "text-field",
            Self::TextFont => "text-font",
            Self::TextSize => "text-size",
        }
    }
}

/// Geometry types a layer can be restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// Points and multi-points.
    Point,
    /// Lines and multi-lines.
    LineString,
    /// Polygons and multi-polygons.
    Polygon,
}

impl GeometryType {
    /// Returns the GeoJSON type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        }
    }

    /// Returns the filter `["==", "$type", <type>]`.
    #[must_use]
    pub fn filter(self) -> Value {
        json!(["==", "$type", self.as_str()])
    }
}

/// One property write on an existing layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerProperty {
    /// Layout `visibility`.
    Visibility(Visibility),
    /// `minzoom` and `maxzoom` together.
    ZoomRange(ZoomRange),
    /// Feature filter; `None` removes it.
    Filter(Option<Value>),
    /// A paint property.
    Paint(PaintProperty, Value),
    /// A layout property.
    Layout(LayoutProperty, Value),
}

impl LayerProperty {
    /// Returns a short name for diagnostics: the style key, or `zoom-range`
    /// and `filter` for the structural properties.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visibility(_) => "visibility",
            Self::ZoomRange(_) => "zoom-range",
            Self::Filter(_) => "filter",
            Self::Paint(key, _) => key.key(),
            Self::Layout(key, _) => key.key(),
        }
    }

    /// Returns the written value as JSON.
    ///
    /// A zoom range is `[min, max]` and a removed filter is `null`.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Visibility(visibility) => Value::from(visibility.as_str()),
            Self::ZoomRange(range) => json!([range.min, range.max]),
            Self::Filter(filter) => filter.clone().unwrap_or(Value::Null),
            Self::Paint(_, value) | Self::Layout(_, value) => value.clone(),
        }
    }
}
