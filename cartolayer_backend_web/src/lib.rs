// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MapLibre GL JS backend for cartolayer.
//!
//! This crate implements [`MapHandle`] over a MapLibre GL JS `Map` object
//! handed over from JavaScript:
//!
//! - [`JsMap`]: the imported `Map` type (the methods cartolayer calls).
//! - [`MaplibreMap`]: a [`MapHandle`] wrapping a [`JsMap`].
//!
//! MapLibre reports most misuse through its `error` event instead of
//! throwing. [`MaplibreMap`] checks ids before each call so that duplicate
//! and unknown ids surface as [`MapError`](cartolayer_core::MapError) values,
//! exactly as with [`MemoryMap`](cartolayer_core::MemoryMap). Anything the
//! engine still throws becomes
//! [`MapError::Rejected`](cartolayer_core::MapError::Rejected).

mod bindings;
mod map;
mod setter;

pub use bindings::JsMap;
pub use cartolayer_core::handle::MapHandle;
pub use map::MaplibreMap;
