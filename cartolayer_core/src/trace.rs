// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for map mutations.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that are
//! called after each successful mutation of a map. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! [`Traced`] is a [`MapHandle`] adapter: it forwards every call to the inner
//! handle and emits the matching event through its [`Tracer`]. Failed calls
//! emit nothing.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::error::MapError;
use crate::handle::MapHandle;
use crate::layer::{LayerProperty, LayerSpec, LayerType};
use crate::source::SourceSpec;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a layer is registered.
#[derive(Clone, Copy, Debug)]
pub struct LayerAddedEvent<'a> {
    /// Layer id.
    pub id: &'a str,
    /// Layer type.
    pub layer_type: LayerType,
    /// Source the layer draws from.
    pub source: Option<&'a str>,
}

/// Emitted after a layer is removed.
#[derive(Clone, Copy, Debug)]
pub struct LayerRemovedEvent<'a> {
    /// Layer id.
    pub id: &'a str,
}

/// Emitted after a layer changes position in the render order.
#[derive(Clone, Copy, Debug)]
pub struct LayerMovedEvent<'a> {
    /// Layer id.
    pub id: &'a str,
    /// Layer it now sits beneath, or `None` when moved to the top.
    pub before: Option<&'a str>,
}

/// Emitted after a property is written on a layer.
#[derive(Clone, Copy, Debug)]
pub struct PropertyChangedEvent<'a> {
    /// Layer id.
    pub id: &'a str,
    /// The property and its new value.
    pub property: &'a LayerProperty,
}

/// Emitted after a source is registered.
#[derive(Clone, Copy, Debug)]
pub struct SourceAddedEvent<'a> {
    /// Source id.
    pub id: &'a str,
    /// Source definition.
    pub source: &'a SourceSpec,
}

/// Emitted after a source is removed.
#[derive(Clone, Copy, Debug)]
pub struct SourceRemovedEvent<'a> {
    /// Source id.
    pub id: &'a str,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events for map mutations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a layer is added.
    fn on_layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        _ = e;
    }

    /// Called after a layer is removed.
    fn on_layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        _ = e;
    }

    /// Called after a layer is moved.
    fn on_layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        _ = e;
    }

    /// Called after a property is written.
    fn on_property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        _ = e;
    }

    /// Called after a source is added.
    fn on_source_added(&mut self, e: &SourceAddedEvent<'_>) {
        _ = e;
    }

    /// Called after a source is removed.
    fn on_source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayerAddedEvent`].
    #[inline]
    pub fn layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerRemovedEvent`].
    #[inline]
    pub fn layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_removed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerMovedEvent`].
    #[inline]
    pub fn layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_moved(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PropertyChangedEvent`].
    #[inline]
    pub fn property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_property_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SourceAddedEvent`].
    #[inline]
    pub fn source_added(&mut self, e: &SourceAddedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_source_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SourceRemovedEvent`].
    #[inline]
    pub fn source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_source_removed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Traced handle adapter
// ---------------------------------------------------------------------------

/// A [`MapHandle`] that reports every successful mutation to a [`Tracer`].
///
/// ```
/// use cartolayer_core::MemoryMap;
/// use cartolayer_core::trace::{NoopSink, Traced, Tracer};
///
/// let mut map = MemoryMap::new();
/// let mut sink = NoopSink;
/// let mut traced = Traced::new(&mut map, Tracer::new(&mut sink));
/// # let _ = &mut traced;
/// ```
#[derive(Debug)]
pub struct Traced<'t, H> {
    inner: H,
    tracer: Tracer<'t>,
}

impl<'t, H: MapHandle> Traced<'t, H> {
    /// Wraps `inner`, reporting to `tracer`.
    #[must_use]
    pub fn new(inner: H, tracer: Tracer<'t>) -> Self {
        Self { inner, tracer }
    }

    /// Borrows the wrapped handle.
    #[must_use]
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps the handle, dropping the tracer.
    #[must_use]
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: MapHandle> MapHandle for Traced<'_, H> {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), MapError> {
        let id = layer.id.clone();
        let layer_type = layer.layer_type;
        let source = layer.source.clone();
        self.inner.add_layer(layer)?;
        self.tracer.layer_added(&LayerAddedEvent {
            id: &id,
            layer_type,
            source: source.as_deref(),
        });
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        self.inner.remove_layer(id)?;
        self.tracer.layer_removed(&LayerRemovedEvent { id });
        Ok(())
    }

    fn layer(&self, id: &str) -> Option<LayerSpec> {
        self.inner.layer(id)
    }

    fn layers(&self) -> Vec<LayerSpec> {
        self.inner.layers()
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        self.inner.move_layer(id, before)?;
        self.tracer.layer_moved(&LayerMovedEvent { id, before });
        Ok(())
    }

    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        #[cfg(feature = "trace")]
        let added = source.clone();
        self.inner.add_source(id, source)?;
        #[cfg(feature = "trace")]
        self.tracer.source_added(&SourceAddedEvent { id, source: &added });
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        self.inner.remove_source(id)?;
        self.tracer.source_removed(&SourceRemovedEvent { id });
        Ok(())
    }

    fn source(&self, id: &str) -> Option<SourceSpec> {
        self.inner.source(id)
    }

    fn set_property(&mut self, id: &str, property: &LayerProperty) -> Result<(), MapError> {
        self.inner.set_property(id, property)?;
        self.tracer
            .property_changed(&PropertyChangedEvent { id, property });
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.inner.has_layer(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.inner.has_source(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
