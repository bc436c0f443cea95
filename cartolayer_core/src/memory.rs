// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory map handle.

use std::collections::BTreeMap;

use crate::error::MapError;
use crate::handle::MapHandle;
use crate::layer::{LayerProperty, LayerSpec};
use crate::source::SourceSpec;

/// A [`MapHandle`] that keeps the style in memory.
///
/// Layers are held in render order (bottom first) and sources by id. Calls
/// fail the way a MapLibre map fails for the same misuse: duplicate ids,
/// unknown layers, or removing a source a layer still draws from. Layers may
/// reference sources that were never registered.
#[derive(Clone, Debug, Default)]
pub struct MemoryMap {
    layers: Vec<LayerSpec>,
    sources: BTreeMap<String, SourceSpec>,
}

impl MemoryMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding `layers` in the given order.
    ///
    /// Later layers replace earlier ones with the same id.
    #[must_use]
    pub fn with_layers(layers: impl IntoIterator<Item = LayerSpec>) -> Self {
        let mut map = Self::new();
        for layer in layers {
            if let Some(idx) = map.position(&layer.id) {
                map.layers.remove(idx);
            }
            map.layers.push(layer);
        }
        map
    }

    /// Returns the layer ids in render order.
    #[must_use]
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.id.as_str()).collect()
    }

    /// Borrows a layer without cloning it.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns whether the map has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the registered source ids.
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    fn require(&self, id: &str) -> Result<usize, MapError> {
        self.position(id)
            .ok_or_else(|| MapError::UnknownLayer(id.to_owned()))
    }
}

impl MapHandle for MemoryMap {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError> {
        if self.position(&layer.id).is_some() {
            return Err(MapError::DuplicateLayer(layer.id));
        }
        self.layers.push(layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        let idx = self.require(id)?;
        self.layers.remove(idx);
        Ok(())
    }

    fn layer(&self, id: &str) -> Option<LayerSpec> {
        self.get(id).cloned()
    }

    fn layers(&self) -> Vec<LayerSpec> {
        self.layers.clone()
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        let from = self.require(id)?;
        if let Some(before) = before {
            self.require(before)?;
            if before == id {
                return Ok(());
            }
        }

        let layer = self.layers.remove(from);
        // Resolve `before` after removal so the index accounts for the shift.
        let to = match before {
            Some(before) => self.require(before)?,
            None => self.layers.len(),
        };
        self.layers.insert(to, layer);
        Ok(())
    }

    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_owned()));
        }
        self.sources.insert(id.to_owned(), source);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if !self.sources.contains_key(id) {
            return Err(MapError::UnknownSource(id.to_owned()));
        }
        if let Some(user) = self
            .layers
            .iter()
            .find(|layer| layer.source.as_deref() == Some(id))
        {
            return Err(MapError::SourceInUse {
                source_id: id.to_owned(),
                layer_id: user.id.clone(),
            });
        }
        self.sources.remove(id);
        Ok(())
    }

    fn source(&self, id: &str) -> Option<SourceSpec> {
        self.sources.get(id).cloned()
    }

    fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError> {
        let idx = self.require(id)?;
        self.layers[idx].apply(property);
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::layer::{LayerType, PaintProperty, Visibility};

    fn layer(id: &str) -> LayerSpec {
        LayerSpec::new(id, LayerType::Line).with_source(id)
    }

    fn map_of(ids: &[&str]) -> MemoryMap {
        MemoryMap::with_layers(ids.iter().map(|id| layer(id)))
    }

    #[test]
    fn add_and_remove() {
        let mut map = MemoryMap::new();
        map.add_layer(layer("a")).unwrap();
        assert!(map.has_layer("a"));
        map.remove_layer("a").unwrap();
        assert!(!map.has_layer("a"));
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_layer_is_rejected() {
        let mut map = map_of(&["a"]);
        assert_eq!(
            map.add_layer(layer("a")),
            Err(MapError::DuplicateLayer("a".into()))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn removing_unknown_layer_fails() {
        let mut map = map_of(&["a"]);
        assert_eq!(
            map.remove_layer("b"),
            Err(MapError::UnknownLayer("b".into()))
        );
    }

    #[test]
    fn move_to_top() {
        let mut map = map_of(&["a", "b", "c"]);
        map.move_layer("a", None).unwrap();
        assert_eq!(map.layer_ids(), ["b", "c", "a"]);
    }

    #[test]
    fn move_before_lower_layer() {
        let mut map = map_of(&["a", "b", "c"]);
        map.move_layer("c", Some("a")).unwrap();
        assert_eq!(map.layer_ids(), ["c", "a", "b"]);
    }

    #[test]
    fn move_before_higher_layer() {
        let mut map = map_of(&["a", "b", "c"]);
        map.move_layer("a", Some("c")).unwrap();
        assert_eq!(map.layer_ids(), ["b", "a", "c"]);
    }

    #[test]
    fn move_before_itself_is_a_no_op() {
        let mut map = map_of(&["a", "b"]);
        map.move_layer("a", Some("a")).unwrap();
        assert_eq!(map.layer_ids(), ["a", "b"]);
    }

    #[test]
    fn move_with_unknown_ids_fails_without_reordering() {
        let mut map = map_of(&["a", "b"]);
        assert!(map.move_layer("x", None).is_err(), "unknown layer");
        assert!(map.move_layer("a", Some("x")).is_err(), "unknown anchor");
        assert_eq!(map.layer_ids(), ["a", "b"]);
    }

    #[test]
    fn source_in_use_cannot_be_removed() {
        let mut map = map_of(&["a"]);
        map.add_source("a", SourceSpec::geojson(json!(null))).unwrap();
        assert!(
            matches!(map.remove_source("a"), Err(MapError::SourceInUse { .. })),
            "layer `a` still draws from source `a`"
        );
        map.remove_layer("a").unwrap();
        map.remove_source("a").unwrap();
        assert_eq!(map.source("a"), None);
    }

    #[test]
    fn duplicate_and_unknown_sources() {
        let mut map = MemoryMap::new();
        map.add_source("s", SourceSpec::vector_url("u")).unwrap();
        assert_eq!(
            map.add_source("s", SourceSpec::vector_url("v")),
            Err(MapError::DuplicateSource("s".into()))
        );
        assert_eq!(
            map.remove_source("t"),
            Err(MapError::UnknownSource("t".into()))
        );
        assert_eq!(map.source_ids().collect::<Vec<_>>(), ["s"]);
    }

    #[test]
    fn set_property_writes_in_place() {
        let mut map = map_of(&["a", "b"]);
        map.set_property("b", &LayerProperty::Visibility(Visibility::Hidden))
            .unwrap();
        map.set_property(
            "b",
            &LayerProperty::Paint(PaintProperty::LineColor, json!("blue")),
        )
        .unwrap();

        let b = map.get("b").unwrap();
        assert_eq!(b.visibility(), Visibility::Hidden);
        assert_eq!(b.paint_value(PaintProperty::LineColor), Some(&json!("blue")));
        assert_eq!(map.layer_ids(), ["a", "b"]);
    }

    #[test]
    fn with_layers_keeps_last_duplicate() {
        let map = MemoryMap::with_layers([
            layer("a"),
            layer("b"),
            LayerSpec::new("a", LayerType::Fill),
        ]);
        assert_eq!(map.layer_ids(), ["b", "a"]);
        assert_eq!(map.get("a").unwrap().layer_type, LayerType::Fill);
    }
}
