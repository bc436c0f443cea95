// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, JSON export, and `tracing` bridges for
//! cartolayer diagnostics.
//!
//! This crate provides [`TraceSink`](cartolayer_core::trace::TraceSink)
//! implementations for development and post-mortem analysis of the
//! mutations a map goes through:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: owned, sequenced recording of every event.
//! - [`json::export`]: writes a recording as a JSON array.
//! - [`tracing_sink::TracingSink`]: forwards events to the `tracing` crate.

pub mod json;
pub mod pretty;
pub mod recorder;
pub mod tracing_sink;
