// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map handle contract.
//!
//! The map is owned and rendered elsewhere. Everything this crate does to it
//! goes through [`MapHandle`], which is the whole capability set the
//! operations need:
//!
//! - **Layers**: add, remove, read one, read all in render order, move.
//! - **Sources**: add, remove, read one, test for existence.
//! - **Properties**: write one typed [`LayerProperty`] on a layer.
//!
//! Implementations:
//!
//! - [`MemoryMap`](crate::memory::MemoryMap): in-memory, used by tests and
//!   tools that build a style offline.
//! - `cartolayer_backend_web::MaplibreMap`: a MapLibre GL JS map.
//! - [`Traced`](crate::trace::Traced): wraps any handle and reports each
//!   mutation to a [`TraceSink`](crate::trace::TraceSink).
//!
//! # Render order
//!
//! [`layers`](MapHandle::layers) lists layers bottom first: the last layer is
//! drawn on top. [`move_layer`](MapHandle::move_layer) with `before` inserts
//! the layer immediately before `before` in that list (so directly beneath
//! it); without `before` it moves the layer to the end.

use crate::error::MapError;
use crate::layer::{LayerProperty, LayerSpec};
use crate::source::SourceSpec;

/// The capability set of a map-rendering handle.
///
/// Access is exclusive and synchronous; every call completes or fails before
/// returning.
pub trait MapHandle {
    /// Registers a layer on top of the render order.
    ///
    /// Fails with [`MapError::DuplicateLayer`] if the id is taken.
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError>;

    /// Removes a layer.
    ///
    /// Fails with [`MapError::UnknownLayer`] if there is no such layer.
    fn remove_layer(&mut self, id: &str) -> Result<(), MapError>;

    /// Returns a snapshot of one layer.
    fn layer(&self, id: &str) -> Option<LayerSpec>;

    /// Returns a snapshot of every layer, bottom first.
    ///
    /// Layers the handle cannot express as a [`LayerSpec`] (for example a
    /// type added by a newer engine) are left out. Group operations in
    /// [`ops`](crate::ops) never see them: they are not moved, hidden, or
    /// removed with their group, and a move anchors only on listed layers.
    fn layers(&self) -> Vec<LayerSpec>;

    /// Moves a layer directly beneath `before`, or to the top when `before`
    /// is `None`.
    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError>;

    /// Registers a source.
    ///
    /// Fails with [`MapError::DuplicateSource`] if the id is taken.
    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError>;

    /// Removes a source.
    fn remove_source(&mut self, id: &str) -> Result<(), MapError>;

    /// Returns a snapshot of one source.
    ///
    /// `None` also covers registered sources whose definition the handle
    /// cannot express as a [`SourceSpec`]; use
    /// [`has_source`](Self::has_source) to test for existence.
    fn source(&self, id: &str) -> Option<SourceSpec>;

    /// Writes one property on an existing layer.
    fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError>;

    /// Returns whether a layer with exactly this id exists.
    fn has_layer(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    /// Returns whether a source with exactly this id is registered.
    fn has_source(&self, id: &str) -> bool {
        self.source(id).is_some()
    }
}

impl<H: MapHandle + ?Sized> MapHandle for &mut H {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError> {
        (**self).add_layer(layer)
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        (**self).remove_layer(id)
    }

    fn layer(&self, id: &str) -> Option<LayerSpec> {
        (**self).layer(id)
    }

    fn layers(&self) -> Vec<LayerSpec> {
        (**self).layers()
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        (**self).move_layer(id, before)
    }

    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        (**self).add_source(id, source)
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        (**self).remove_source(id)
    }

    fn source(&self, id: &str) -> Option<SourceSpec> {
        (**self).source(id)
    }

    fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError> {
        (**self).set_property(id, property)
    }

    fn has_layer(&self, id: &str) -> bool {
        (**self).has_layer(id)
    }

    fn has_source(&self, id: &str) -> bool {
        (**self).has_source(id)
    }
}
