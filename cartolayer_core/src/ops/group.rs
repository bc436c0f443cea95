// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operations on every engine layer of a logical map layer.
//!
//! A logical map layer `id` owns the engine layers that
//! [`is_group_member`] accepts: `id` itself, its compound ids (`id-fill`,
//! `id_water`, ...), and any layer drawing from the source `id`.
//!
//! # Reordering
//!
//! [`move_layers`] reads "before" the way a layer panel lists layers, top
//! first: moving `a` before `b` puts the whole `a` group directly above the
//! `b` group in the render order.
//!
//! ```text
//!   render order (bottom → top)       move_layers(map, "a", Some("b"))
//!   a  b  c                      ──►  b  a  c
//!   a  a_x  c                    ──►  c  a  a_x         (move_layers(map, "a", None))
//! ```

use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{LayerProperty, LayerSpec, Visibility, is_group_member};

/// Returns the layers of the logical map layer `id`, in render order.
#[must_use]
pub fn get_layers<M: MapHandle + ?Sized>(map: &M, id: &str) -> Vec<LayerSpec> {
    map.layers()
        .into_iter()
        .filter(|layer| is_group_member(layer, id))
        .collect()
}

/// Returns whether a layer with exactly this id exists.
#[must_use]
pub fn has_layer<M: MapHandle + ?Sized>(map: &M, id: &str) -> bool {
    map.has_layer(id)
}

/// Moves the `id` group directly above the `before` group, or to the top of
/// the render order when `before` is `None` or names no layers.
///
/// Relative order inside the moved group is preserved. If `id` names no
/// layers nothing happens.
pub fn move_layers<M: MapHandle + ?Sized>(
    map: &mut M,
    id: &str,
    before: Option<&str>,
) -> Result<(), LayerError> {
    if before == Some(id) {
        return Ok(());
    }
    let layers = map.layers();
    let moving: Vec<&str> = layers
        .iter()
        .filter(|layer| is_group_member(layer, id))
        .map(|layer| layer.id.as_str())
        .collect();
    if moving.is_empty() {
        return Ok(());
    }

    let anchor = before.and_then(|before| anchor_above(&layers, id, before));
    for layer_id in moving {
        map.move_layer(layer_id, anchor)?;
    }
    Ok(())
}

/// Finds the layer the moved group must be inserted beneath so that it lands
/// right above the `before` group.
///
/// `None` means the top of the render order.
fn anchor_above<'a>(layers: &'a [LayerSpec], id: &str, before: &str) -> Option<&'a str> {
    let moving = |layer: &LayerSpec| is_group_member(layer, id);
    let last = layers
        .iter()
        .rposition(|layer| is_group_member(layer, before) && !moving(layer))?;
    layers[last + 1..]
        .iter()
        .find(|layer| !moving(layer))
        .map(|layer| layer.id.as_str())
}

/// Removes every layer of the `id` group, then the source `id` if
/// `remove_source` is set.
///
/// Missing layers and a missing source are not errors.
pub fn remove_layers<M: MapHandle + ?Sized>(
    map: &mut M,
    id: &str,
    remove_source: bool,
) -> Result<(), LayerError> {
    for layer in get_layers(map, id) {
        map.remove_layer(&layer.id)?;
    }
    if remove_source && map.has_source(id) {
        map.remove_source(id)?;
    }
    Ok(())
}

/// Sets the visibility of every layer of the `id` group.
pub fn update_layer_visibility<M: MapHandle + ?Sized>(
    map: &mut M,
    id: &str,
    visibility: Visibility,
) -> Result<(), LayerError> {
    let property = LayerProperty::Visibility(visibility);
    for layer in get_layers(map, id) {
        map.set_property(&layer.id, &property)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::MapError;
    use crate::layer::LayerType;
    use crate::memory::MemoryMap;
    use crate::source::SourceSpec;

    /// Registers sources but cannot read their definitions back, like an
    /// engine holding source types [`SourceSpec`] does not model.
    struct OpaqueSources(MemoryMap);

    impl MapHandle for OpaqueSources {
        fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError> {
            self.0.add_layer(layer)
        }

        fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
            self.0.remove_layer(id)
        }

        fn layer(&self, id: &str) -> Option<LayerSpec> {
            self.0.layer(id)
        }

        fn layers(&self) -> Vec<LayerSpec> {
            self.0.layers()
        }

        fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
            self.0.move_layer(id, before)
        }

        fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
            self.0.add_source(id, source)
        }

        fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
            self.0.remove_source(id)
        }

        fn source(&self, _id: &str) -> Option<SourceSpec> {
            None
        }

        fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError> {
            self.0.set_property(id, property)
        }

        fn has_source(&self, id: &str) -> bool {
            self.0.has_source(id)
        }
    }

    fn layer(id: &str, source: &str) -> LayerSpec {
        LayerSpec::new(id, LayerType::Fill).with_source(source)
    }

    /// `layer-11` draws from the `layer-1` source, so it belongs to `layer-1`.
    fn shared_source_map() -> MemoryMap {
        MemoryMap::with_layers([
            layer("layer-1", "layer-1"),
            layer("layer-11", "layer-1"),
            layer("layer-2", "layer-2"),
        ])
    }

    fn three_layer_map() -> MemoryMap {
        MemoryMap::with_layers([
            layer("layer-1", "layer-1"),
            layer("layer-2", "layer-2"),
            layer("layer-3", "layer-3"),
        ])
    }

    #[test]
    fn get_layers_finds_exact_id() {
        let map = MemoryMap::with_layers([layer("layer-1", "layer-1")]);
        let found = get_layers(&map, "layer-1");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "layer-1");
    }

    #[test]
    fn get_layers_ignores_numeric_prefix_collision() {
        let map = MemoryMap::with_layers([
            layer("layer-1", "layer-1"),
            layer("layer-11", "layer-11"),
        ]);
        let ids: Vec<_> = get_layers(&map, "layer-1").into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["layer-1"]);
    }

    #[test]
    fn get_layers_collects_compound_ids_in_render_order() {
        let map = MemoryMap::with_layers([
            layer("parcels-fill", "parcels"),
            layer("roads-line", "roads"),
            layer("parcels-fill-outline", "parcels"),
            layer("base_water", "base"),
        ]);
        let ids: Vec<_> = get_layers(&map, "parcels").into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["parcels-fill", "parcels-fill-outline"]);
    }

    #[test]
    fn has_layer_is_exact() {
        let map = MemoryMap::with_layers([layer("layer-1", "layer-1")]);
        assert!(has_layer(&map, "layer-1"));
        assert!(!has_layer(&map, "layer-2"));
        assert!(!has_layer(&map, "layer"));
    }

    #[test]
    fn move_to_top() {
        let mut map = shared_source_map();
        move_layers(&mut map, "layer-1", None).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2", "layer-1", "layer-11"]);
    }

    #[test]
    fn move_before_middle_layer() {
        let mut map = three_layer_map();
        move_layers(&mut map, "layer-1", Some("layer-2")).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2", "layer-1", "layer-3"]);
    }

    #[test]
    fn move_before_top_layer_goes_to_top() {
        let mut map = three_layer_map();
        move_layers(&mut map, "layer-1", Some("layer-3")).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2", "layer-3", "layer-1"]);
    }

    #[test]
    fn move_downwards_keeps_group_together() {
        let mut map = MemoryMap::with_layers([
            layer("a-fill", "a"),
            layer("b-fill", "b"),
            layer("b-fill-outline", "b"),
            layer("c-fill", "c"),
        ]);
        move_layers(&mut map, "b", Some("a")).unwrap();
        assert_eq!(map.layer_ids(), ["a-fill", "b-fill", "b-fill-outline", "c-fill"]);
        move_layers(&mut map, "c", Some("a")).unwrap();
        assert_eq!(map.layer_ids(), ["a-fill", "c-fill", "b-fill", "b-fill-outline"]);
    }

    #[test]
    fn move_with_unknown_before_goes_to_top() {
        let mut map = three_layer_map();
        move_layers(&mut map, "layer-1", Some("layer-9")).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2", "layer-3", "layer-1"]);
    }

    #[test]
    fn move_unmatched_id_is_a_no_op() {
        let mut map = three_layer_map();
        move_layers(&mut map, "layer-4", Some("layer-2")).unwrap();
        assert_eq!(map.layer_ids(), ["layer-1", "layer-2", "layer-3"]);
    }

    #[test]
    fn move_before_itself_is_a_no_op() {
        let mut map = three_layer_map();
        move_layers(&mut map, "layer-2", Some("layer-2")).unwrap();
        assert_eq!(map.layer_ids(), ["layer-1", "layer-2", "layer-3"]);
    }

    #[test]
    fn remove_layers_keeps_source_by_default() {
        let mut map = shared_source_map();
        map.add_source("layer-1", SourceSpec::geojson(json!(null))).unwrap();
        remove_layers(&mut map, "layer-1", false).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2"]);
        assert!(map.source("layer-1").is_some(), "source must stay registered");
    }

    #[test]
    fn remove_layers_with_source() {
        let mut map = shared_source_map();
        map.add_source("layer-2", SourceSpec::geojson(json!(null))).unwrap();
        remove_layers(&mut map, "layer-2", true).unwrap();
        assert_eq!(map.layer_ids(), ["layer-1", "layer-11"]);
        assert_eq!(map.source("layer-2"), None);
    }

    #[test]
    fn remove_layers_drops_sources_that_cannot_be_read_back() {
        let mut map = OpaqueSources(MemoryMap::with_layers([
            LayerSpec::new("dem-hillshade", LayerType::Hillshade).with_source("dem"),
            layer("layer-1", "layer-1"),
        ]));
        map.add_source(
            "dem",
            SourceSpec::Raster {
                url: Some("https://tiles.example.com/dem.json".into()),
                tiles: Vec::new(),
                tile_size: Some(256),
            },
        )
        .unwrap();
        assert_eq!(map.source("dem"), None);

        remove_layers(&mut map, "dem", true).unwrap();
        assert_eq!(map.0.layer_ids(), ["layer-1"]);
        assert!(!map.has_source("dem"), "source must be removed with its layers");
    }

    #[test]
    fn remove_layers_is_idempotent() {
        let mut map = three_layer_map();
        remove_layers(&mut map, "layer-9", true).unwrap();
        remove_layers(&mut map, "layer-1", true).unwrap();
        remove_layers(&mut map, "layer-1", true).unwrap();
        assert_eq!(map.layer_ids(), ["layer-2", "layer-3"]);
    }

    #[test]
    fn visibility_applies_to_whole_group() {
        let mut map = MemoryMap::with_layers([
            layer("layer-1", "layer-1")
                .with_properties(&[LayerProperty::Visibility(Visibility::Hidden)]),
            layer("layer-11", "layer-1"),
        ]);
        update_layer_visibility(&mut map, "layer-1", Visibility::Visible).unwrap();
        let visibilities: Vec<_> = map.layers().iter().map(LayerSpec::visibility).collect();
        assert_eq!(visibilities, [Visibility::Visible; 2]);

        update_layer_visibility(&mut map, "layer-1", Visibility::Hidden).unwrap();
        assert!(
            map.layers().iter().all(|l| l.visibility() == Visibility::Hidden),
            "every member must be hidden"
        );
    }
}
