// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// Failures reported by a [`MapHandle`](crate::handle::MapHandle).
///
/// These mirror the conditions a rendering engine rejects. Operations in
/// [`ops`](crate::ops) pass them through unmodified inside
/// [`LayerError::Map`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// A layer with this id is already registered.
    #[error("layer with id \"{0}\" already exists on this map")]
    DuplicateLayer(String),
    /// The layer id does not exist in the map's style.
    #[error("layer \"{0}\" does not exist in the map's style")]
    UnknownLayer(String),
    /// A source with this id is already registered.
    #[error("there is already a source with id \"{0}\"")]
    DuplicateSource(String),
    /// The source id is not registered.
    #[error("there is no source with id \"{0}\"")]
    UnknownSource(String),
    /// The source is still referenced by a layer.
    #[error("source \"{source_id}\" cannot be removed while layer \"{layer_id}\" is using it")]
    SourceInUse {
        /// Source that was to be removed.
        source_id: String,
        /// First layer still referencing it.
        layer_id: String,
    },
    /// The engine rejected the call; carries the engine's message.
    #[error("{0}")]
    Rejected(String),
}

/// Failures of the layer operations in [`ops`](crate::ops).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
    /// An update targeted a layer that was never added.
    #[error("no layer with id \"{0}\"; add it before updating it")]
    NotFound(String),
    /// The map handle failed.
    #[error(transparent)]
    Map(#[from] MapError),
}
