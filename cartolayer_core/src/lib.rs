// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed layer, source, and style helpers over a vector-map rendering handle.
//!
//! `cartolayer_core` turns a handful of user-facing style parameters (colors,
//! widths, opacity percentages, zoom bounds, visibility, label text) into
//! layer and source mutations on a map that somebody else owns and renders.
//! The map is reached only through the [`MapHandle`](handle::MapHandle)
//! trait, so the same operations drive a MapLibre GL JS map in the browser
//! and the in-memory [`MemoryMap`](memory::MemoryMap) used in tests.
//!
//! # Architecture
//!
//! ```text
//!   CircleStyle / LineStyle / PolygonStyle / SymbolStyle / OsmLayerSpec
//!       │
//!       ▼
//!   ops::add_* / ops::update_* ──► LayerSpec + LayerProperty
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   MapHandle (MemoryMap, MaplibreMap, Traced<H>) ──► TraceSink
//! ```
//!
//! **[`layer`]** — Layer descriptors ([`LayerSpec`](layer::LayerSpec)), the
//! typed property table ([`PaintProperty`](layer::PaintProperty),
//! [`LayoutProperty`](layer::LayoutProperty)), and deterministic layer ids.
//!
//! **[`source`]** — Source definitions registered on the map.
//!
//! **[`style`]** — Style configuration objects as a layer panel produces them.
//!
//! **[`handle`]** — The [`MapHandle`](handle::MapHandle) capability set.
//!
//! **[`ops`]** — Add/update/query/move/remove operations.
//!
//! **[`memory`]** — An in-memory [`MapHandle`](handle::MapHandle).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and the
//! [`Traced`](trace::Traced) handle adapter.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
pub mod handle;
pub mod layer;
pub mod memory;
pub mod ops;
pub mod source;
pub mod style;
pub mod trace;

pub use error::{LayerError, MapError};
pub use handle::MapHandle;
pub use memory::MemoryMap;
