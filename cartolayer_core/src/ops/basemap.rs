// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector-tile base maps.
//!
//! A base map is one logical map layer backed by an external style
//! document. Its tile source is registered under the map-layer id, and each
//! style layer is added under a composed id so the whole set can be queried,
//! moved, and removed as one group:
//!
//! ```text
//!   style document                       map
//!   ┌───────────────────────────┐        ┌────────────────────────────────┐
//!   │ sources: { openmaptiles } │  ──►   │ source  "b5a1"                 │
//!   │ layers:                   │        │ layer   "b5a1_water"  (b5a1)   │
//!   │   water  (openmaptiles)   │  ──►   │ layer   "b5a1_road"   (b5a1)   │
//!   │   road   (openmaptiles)   │        │                                │
//!   └───────────────────────────┘        └────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::group::get_layers;
use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{
    LayerProperty, LayerSpec, PaintProperty, Visibility, ZoomRange, parse_style_layers,
    style_layer_id,
};
use crate::source::SourceSpec;
use crate::style::Opacity;

/// Where a base map's tiles come from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmSourceRef {
    /// TileJSON document URL.
    #[serde(rename = "dataURL")]
    pub data_url: String,
}

/// Where a base map's style document comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmStyleRef {
    /// Style document URL.
    #[serde(rename = "styleURL")]
    pub style_url: String,
}

/// Configuration of a vector-tile base-map layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsmLayerSpec {
    /// Map-layer id; also the id of the tile source.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Map-layer type tag as stored by the layer panel.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub map_layer_type: String,
    /// `[min, max]` zoom.
    pub zoom_range: [u8; 2],
    /// Opacity percentage applied to every style layer.
    #[serde(default)]
    pub opacity: Opacity,
    /// Visibility of every style layer.
    #[serde(default)]
    pub visibility: Visibility,
    /// Tile source.
    pub source: OsmSourceRef,
    /// Style document.
    pub style: OsmStyleRef,
}

impl OsmLayerSpec {
    /// Returns the zoom bounds.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        ZoomRange::new(self.zoom_range[0], self.zoom_range[1])
    }

    /// Returns the id the tile source is registered under.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.id
    }

    /// Returns the zoom range, visibility, and opacity writes for `layer`.
    fn properties_for(&self, layer: &LayerSpec) -> Vec<LayerProperty> {
        let mut props = vec![
            LayerProperty::ZoomRange(self.zoom_range()),
            LayerProperty::Visibility(self.visibility),
        ];
        if let Some(key) = PaintProperty::opacity_for(layer.layer_type) {
            props.push(LayerProperty::Paint(key, self.opacity.value()));
        }
        props
    }
}

/// A MapLibre style document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Style format version, `8` for every current engine.
    pub version: u8,
    /// Style name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source definitions keyed by id, kept verbatim.
    #[serde(default)]
    pub sources: Map<String, Value>,
    /// Style layers, bottom first. Layers of types this crate does not
    /// model are dropped while parsing.
    #[serde(default, deserialize_with = "deserialize_layers")]
    pub layers: Vec<LayerSpec>,
    /// Glyph URL template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
    /// Sprite URL, or an array of named sprites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Value>,
}

fn deserialize_layers<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<LayerSpec>, D::Error> {
    Vec::<Value>::deserialize(deserializer).map(parse_style_layers)
}

impl StyleDocument {
    /// Parses a style document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Registers a vector source backed by the TileJSON document at `url`.
pub fn add_osm_layer_source<M: MapHandle + ?Sized>(
    map: &mut M,
    source_id: &str,
    url: &str,
) -> Result<(), LayerError> {
    map.add_source(source_id, SourceSpec::vector_url(url))?;
    Ok(())
}

/// Adds an external style layer with the base map's zoom range,
/// visibility, and opacity. Returns its id.
///
/// Opacity goes to the property matching the style layer's own type. Layer
/// types without an opacity property keep their style.
pub fn add_osm_style_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    spec: &OsmLayerSpec,
    style_layer: LayerSpec,
) -> Result<String, LayerError> {
    let properties = spec.properties_for(&style_layer);
    let layer = style_layer.with_properties(&properties);
    let id = layer.id.clone();
    map.add_layer(layer)?;
    Ok(id)
}

/// Returns `style_layer` renamed to `<mapLayerId>_<styleLayerId>`.
///
/// A source reference is re-pointed at `map_layer_id`, the id
/// [`add_osm_layer_source`] registers the tiles under.
#[must_use]
pub fn osm_style_layer_with_map_layer_id(map_layer_id: &str, style_layer: LayerSpec) -> LayerSpec {
    let id = style_layer_id(map_layer_id, &style_layer.id);
    let source = style_layer.source.as_ref().map(|_| map_layer_id.to_owned());
    LayerSpec {
        id,
        source,
        ..style_layer
    }
}

/// Registers the base map's source and every layer of `style`. Returns the
/// added layer ids, bottom first.
pub fn add_osm_base_map<M: MapHandle + ?Sized>(
    map: &mut M,
    spec: &OsmLayerSpec,
    style: &StyleDocument,
) -> Result<Vec<String>, LayerError> {
    add_osm_layer_source(map, spec.source_id(), &spec.source.data_url)?;
    let mut ids = Vec::with_capacity(style.layers.len());
    for layer in &style.layers {
        let layer = osm_style_layer_with_map_layer_id(&spec.id, layer.clone());
        ids.push(add_osm_style_layer(map, spec, layer)?);
    }
    Ok(ids)
}

/// Re-applies zoom range, visibility, and opacity to every layer of the
/// base map.
pub fn update_osm_base_map<M: MapHandle + ?Sized>(
    map: &mut M,
    spec: &OsmLayerSpec,
) -> Result<(), LayerError> {
    for layer in get_layers(map, &spec.id) {
        for property in spec.properties_for(&layer) {
            map.set_property(&layer.id, &property)?;
        }
    }
    Ok(())
}
