// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer data model.
//!
//! A *layer* is a named rendering instruction on the map. Each layer has:
//!
//! - A string id. Layers created by [`ops`](crate::ops) derive
//!   it from the source id and a [`LayerKind`] suffix, so the same
//!   (source, kind) pair always names the same layer.
//! - A [`LayerType`] tag, a source reference, and a geometry filter.
//! - **Properties** written through [`LayerProperty`]: visibility, zoom
//!   range, filter, and the typed [`PaintProperty`] / [`LayoutProperty`]
//!   table that maps each logical style field to its style-document key.
//!
//! # Logical layers
//!
//! One user-facing map layer may expand into several engine layers (a
//! polygon is a fill plus an outline; a base map is one layer per style
//! layer). [`is_group_member`] decides which engine layers belong to a
//! logical map-layer id without naive prefix matching, so `layer-1` never
//! captures `layer-11`.

mod id;
mod property;
mod spec;

pub use id::{LayerKind, STYLE_LAYER_SEPARATOR, is_group_member, matches_layer_id, style_layer_id};
pub use property::{GeometryType, LayerProperty, LayoutProperty, PaintProperty};
pub use spec::{LayerSpec, LayerType, Visibility, ZoomRange, parse_style_layers};
