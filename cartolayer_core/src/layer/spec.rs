// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer descriptors in style-document shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::property::{GeometryType, LayerProperty, LayoutProperty, PaintProperty};

/// Style-document key holding a layer's visibility inside `layout`.
const VISIBILITY_KEY: &str = "visibility";

/// The `type` tag of a style layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    /// Solid background.
    Background,
    /// Filled polygons.
    Fill,
    /// Stroked lines.
    Line,
    /// Icons and text labels.
    Symbol,
    /// Circles at point features.
    Circle,
    /// Density heatmap.
    Heatmap,
    /// Extruded polygons.
    FillExtrusion,
    /// Raster tiles.
    Raster,
    /// Hillshading from a raster DEM.
    Hillshade,
    /// Elevation tinting from a raster DEM.
    ColorRelief,
}

impl LayerType {
    /// Returns the style-document spelling of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Symbol => "symbol",
            Self::Circle => "circle",
            Self::Heatmap => "heatmap",
            Self::FillExtrusion => "fill-extrusion",
            Self::Raster => "raster",
            Self::Hillshade => "hillshade",
            Self::ColorRelief => "color-relief",
        }
    }
}

/// Whether a layer is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// The layer is drawn.
    #[default]
    #[serde(rename = "visible")]
    Visible,
    /// The layer is skipped.
    #[serde(rename = "none")]
    Hidden,
}

impl Visibility {
    /// Returns the style-document spelling (`"visible"` or `"none"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "none",
        }
    }

    /// Returns whether the layer is drawn.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Inclusive zoom bounds between which a layer is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    /// Lowest zoom at which the layer is drawn.
    pub min: f64,
    /// Highest zoom at which the layer is drawn.
    pub max: f64,
}

impl ZoomRange {
    /// The bounds an engine applies when a layer sets none.
    pub const FULL: Self = Self {
        min: 0.0,
        max: 24.0,
    };

    /// Creates a zoom range from integer zoom levels.
    #[must_use]
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            min: f64::from(min),
            max: f64::from(max),
        }
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// A style layer: what [`MapHandle::add_layer`](crate::handle::MapHandle::add_layer)
/// registers and [`MapHandle::layers`](crate::handle::MapHandle::layers) returns.
///
/// Field names serialize exactly as in a MapLibre style document, so layers
/// parsed from an external style round-trip through the handle unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Unique layer id.
    pub id: String,
    /// Layer type tag.
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    /// Id of the source this layer draws from (absent for backgrounds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Layer inside a vector-tile source.
    #[serde(
        rename = "source-layer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_layer: Option<String>,
    /// Lowest zoom at which the layer is drawn.
    #[serde(rename = "minzoom", default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    /// Highest zoom at which the layer is drawn.
    #[serde(rename = "maxzoom", default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    /// Feature filter expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Layout properties, keyed by style-document name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    /// Paint properties, keyed by style-document name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub paint: Map<String, Value>,
    /// Arbitrary metadata carried by external styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl LayerSpec {
    /// Creates a layer with no source, filter, or properties.
    #[must_use]
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
            source: None,
            source_layer: None,
            min_zoom: None,
            max_zoom: None,
            filter: None,
            layout: Map::new(),
            paint: Map::new(),
            metadata: None,
        }
    }

    /// Sets the source reference.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Restricts the layer to one geometry type.
    #[must_use]
    pub fn with_geometry_filter(mut self, geometry: GeometryType) -> Self {
        self.filter = Some(geometry.filter());
        self
    }

    /// Applies each property in order.
    #[must_use]
    pub fn with_properties<'a>(
        mut self,
        properties: impl IntoIterator<Item = &'a LayerProperty>,
    ) -> Self {
        for property in properties {
            self.apply(property);
        }
        self
    }

    /// Returns the layer's visibility; a layer without one is visible.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        match self.layout.get(VISIBILITY_KEY).and_then(Value::as_str) {
            Some("none") => Visibility::Hidden,
            _ => Visibility::Visible,
        }
    }

    /// Returns the zoom bounds, filling absent ends from [`ZoomRange::FULL`].
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        ZoomRange {
            min: self.min_zoom.unwrap_or(ZoomRange::FULL.min),
            max: self.max_zoom.unwrap_or(ZoomRange::FULL.max),
        }
    }

    /// Returns a paint property value, if set.
    #[must_use]
    pub fn paint_value(&self, property: PaintProperty) -> Option<&Value> {
        self.paint.get(property.key())
    }

    /// Returns a layout property value, if set.
    #[must_use]
    pub fn layout_value(&self, property: LayoutProperty) -> Option<&Value> {
        self.layout.get(property.key())
    }

    /// Writes one property into the descriptor.
    pub fn apply(&mut self, property: &LayerProperty) {
        match property {
            LayerProperty::Visibility(visibility) => {
                self.layout
                    .insert(VISIBILITY_KEY.into(), Value::from(visibility.as_str()));
            }
            LayerProperty::ZoomRange(range) => {
                self.min_zoom = Some(range.min);
                self.max_zoom = Some(range.max);
            }
            LayerProperty::Filter(filter) => self.filter.clone_from(filter),
            LayerProperty::Paint(key, value) => {
                self.paint.insert(key.key().into(), value.clone());
            }
            LayerProperty::Layout(key, value) => {
                self.layout.insert(key.key().into(), value.clone());
            }
        }
    }
}

/// Parses style-document layers in order, skipping entries that are not a
/// [`LayerSpec`] (an unknown `type` tag, a missing `id`).
#[must_use]
pub fn parse_style_layers(layers: impl IntoIterator<Item = Value>) -> Vec<LayerSpec> {
    layers
        .into_iter()
        .filter_map(|layer| serde_json::from_value(layer).ok())
        .collect()
}
