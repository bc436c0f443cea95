// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`MapHandle`] over a MapLibre GL JS map.

use cartolayer_core::error::MapError;
use cartolayer_core::handle::MapHandle;
use cartolayer_core::layer::{LayerProperty, LayerSpec, parse_style_layers};
use cartolayer_core::source::SourceSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

use crate::bindings::JsMap;
use crate::setter::SetterCall;

/// The part of `getStyle()` the handle reads back.
#[derive(Default, Deserialize)]
struct StyleSnapshot {
    #[serde(default)]
    layers: Vec<Value>,
    #[serde(default)]
    sources: Map<String, Value>,
}

/// A [`MapHandle`] backed by a MapLibre GL JS `Map`.
///
/// Reads go through `getStyle()`, so they see the style exactly as the
/// engine holds it. Layers and sources whose definitions cartolayer does not
/// model are skipped by [`layers`](MapHandle::layers) and
/// [`source`](MapHandle::source) but still count for existence checks.
#[derive(Clone, Debug)]
pub struct MaplibreMap {
    map: JsMap,
}

impl MaplibreMap {
    /// Wraps a map object received from JavaScript.
    #[must_use]
    pub fn new(map: JsMap) -> Self {
        Self { map }
    }

    /// Returns the wrapped map object.
    #[must_use]
    pub fn js_map(&self) -> &JsMap {
        &self.map
    }

    /// Unwraps the map object.
    #[must_use]
    pub fn into_js_map(self) -> JsMap {
        self.map
    }

    fn style(&self) -> StyleSnapshot {
        // `getStyle` throws until the style has loaded; there is nothing to
        // read back yet.
        self.map
            .get_style()
            .ok()
            .and_then(|style| serde_wasm_bindgen::from_value(style).ok())
            .unwrap_or_default()
    }

    fn require_layer(&self, id: &str) -> Result<(), MapError> {
        if self.has_layer(id) {
            Ok(())
        } else {
            Err(MapError::UnknownLayer(id.to_owned()))
        }
    }
}

impl From<JsMap> for MaplibreMap {
    fn from(map: JsMap) -> Self {
        Self::new(map)
    }
}

/// Converts a style fragment into a plain JS object.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Rejected(e.to_string()))
}

/// Extracts the message of a thrown JS value.
fn rejected(err: JsValue) -> MapError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{err:?}")),
    };
    MapError::Rejected(message)
}

impl MapHandle for MaplibreMap {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError> {
        if self.has_layer(&layer.id) {
            return Err(MapError::DuplicateLayer(layer.id));
        }
        let js = to_js(&layer)?;
        self.map.add_layer(&js).map_err(rejected)
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        self.require_layer(id)?;
        self.map.remove_layer(id).map_err(rejected)
    }

    fn layer(&self, id: &str) -> Option<LayerSpec> {
        if !self.has_layer(id) {
            return None;
        }
        self.layers().into_iter().find(|layer| layer.id == id)
    }

    fn layers(&self) -> Vec<LayerSpec> {
        parse_style_layers(self.style().layers)
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        self.require_layer(id)?;
        if let Some(before) = before {
            self.require_layer(before)?;
            if before == id {
                return Ok(());
            }
        }
        self.map
            .move_layer(id, before.map(str::to_owned))
            .map_err(rejected)
    }

    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        if self.has_source(id) {
            return Err(MapError::DuplicateSource(id.to_owned()));
        }
        let js = to_js(&source)?;
        self.map.add_source(id, &js).map_err(rejected)
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if !self.has_source(id) {
            return Err(MapError::UnknownSource(id.to_owned()));
        }
        let user = self
            .style()
            .layers
            .iter()
            .find(|layer| layer.get("source").and_then(Value::as_str) == Some(id))
            .and_then(|layer| layer.get("id").and_then(Value::as_str))
            .map(str::to_owned);
        if let Some(layer_id) = user {
            return Err(MapError::SourceInUse {
                source_id: id.to_owned(),
                layer_id,
            });
        }
        self.map.remove_source(id).map_err(rejected)
    }

    fn source(&self, id: &str) -> Option<SourceSpec> {
        let mut style = self.style();
        serde_json::from_value(style.sources.remove(id)?).ok()
    }

    fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError> {
        self.require_layer(id)?;
        match SetterCall::for_property(property) {
            SetterCall::Paint { name, value } => {
                let value = to_js(&value)?;
                self.map.set_paint_property(id, name, &value)
            }
            SetterCall::Layout { name, value } => {
                let value = to_js(&value)?;
                self.map.set_layout_property(id, name, &value)
            }
            SetterCall::Filter(filter) => {
                let filter = match filter {
                    Some(filter) => to_js(&filter)?,
                    None => JsValue::NULL,
                };
                self.map.set_filter(id, &filter)
            }
            SetterCall::ZoomRange { min, max } => self.map.set_layer_zoom_range(id, min, max),
        }
        .map_err(rejected)
    }

    fn has_layer(&self, id: &str) -> bool {
        !self.map.get_layer(id).is_undefined()
    }

    fn has_source(&self, id: &str) -> bool {
        !self.map.get_source(id).is_undefined()
    }
}
