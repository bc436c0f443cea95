// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer operations.
//!
//! Every operation takes the map handle explicitly and runs to completion
//! before returning. Handle failures pass through unchanged as
//! [`LayerError::Map`].
//!
//! **[`vector`]** — Circle, line, and polygon layers from style configs.
//!
//! **[`symbol`]** — Label layers.
//!
//! **[`group`]** — Query, reorder, remove, and toggle every engine layer of a
//! logical map layer.
//!
//! **[`basemap`]** — Vector-tile base maps built from an external style
//! document.
//!
//! **[`document`]** — GeoJSON document layers realized as a polygon, line,
//! circle, and optional label layer over one source.
//!
//! # Add and update
//!
//! `add_*` registers a fresh layer with every property of the config and
//! returns its id. `update_*` rewrites the same properties on the layer the
//! matching `add_*` created; if that layer does not exist it returns
//! [`LayerError::NotFound`] and leaves the map untouched.

pub mod basemap;
pub mod document;
pub mod group;
pub mod symbol;
pub mod vector;

pub use basemap::{
    OsmLayerSpec, OsmSourceRef, OsmStyleRef, StyleDocument, add_osm_base_map, add_osm_layer_source,
    add_osm_style_layer, osm_style_layer_with_map_layer_id, update_osm_base_map,
};
pub use document::{
    DocumentLayerStyle, LabelStyle, add_document_layer, add_geojson_source, update_document_layer,
};
pub use group::{get_layers, has_layer, move_layers, remove_layers, update_layer_visibility};
pub use symbol::{add_symbol_layer, update_symbol_layer};
pub use vector::{
    add_circle_layer, add_line_layer, add_polygon_layer, update_circle_layer, update_line_layer,
    update_polygon_layer,
};

use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{GeometryType, LayerProperty, LayerSpec, LayerType};

/// Builds a layer on `source_id` and registers it.
fn add_styled_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    id: String,
    layer_type: LayerType,
    source_id: &str,
    geometry: Option<GeometryType>,
    properties: &[LayerProperty],
) -> Result<String, LayerError> {
    let mut layer = LayerSpec::new(id, layer_type).with_source(source_id);
    if let Some(geometry) = geometry {
        layer = layer.with_geometry_filter(geometry);
    }
    let layer = layer.with_properties(properties);
    let id = layer.id.clone();
    map.add_layer(layer)?;
    Ok(id)
}

/// Writes each property list onto its layer.
///
/// All layers are checked first, so a missing one leaves every layer
/// unchanged.
fn update_styled_layers<M: MapHandle + ?Sized>(
    map: &mut M,
    updates: &[(&str, &[LayerProperty])],
) -> Result<(), LayerError> {
    if let Some((missing, _)) = updates.iter().find(|(id, _)| !map.has_layer(id)) {
        return Err(LayerError::NotFound((*missing).to_owned()));
    }
    for (id, properties) in updates {
        for property in *properties {
            map.set_property(id, property)?;
        }
    }
    Ok(())
}
