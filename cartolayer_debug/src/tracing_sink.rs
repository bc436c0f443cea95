// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge into the `tracing` ecosystem.
//!
//! [`TracingSink`] forwards every map mutation as a `tracing` event with
//! target `cartolayer`. Structural changes (layers and sources added,
//! removed, or moved) are logged at `DEBUG`; property writes, which are far
//! more frequent, at `TRACE`.

use cartolayer_core::trace::{
    LayerAddedEvent, LayerMovedEvent, LayerRemovedEvent, PropertyChangedEvent, SourceAddedEvent,
    SourceRemovedEvent, TraceSink,
};

/// A [`TraceSink`] that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn on_layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        tracing::debug!(
            target: "cartolayer",
            layer = %e.id,
            layer_type = e.layer_type.as_str(),
            source = e.source.unwrap_or_default(),
            "layer added"
        );
    }

    fn on_layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        tracing::debug!(target: "cartolayer", layer = %e.id, "layer removed");
    }

    fn on_layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        tracing::debug!(
            target: "cartolayer",
            layer = %e.id,
            before = ?e.before,
            "layer moved"
        );
    }

    fn on_property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        tracing::trace!(
            target: "cartolayer",
            layer = %e.id,
            property = e.property.name(),
            value = %e.property.value(),
            "property changed"
        );
    }

    fn on_source_added(&mut self, e: &SourceAddedEvent<'_>) {
        tracing::debug!(
            target: "cartolayer",
            source = %e.id,
            kind = e.source.kind(),
            "source added"
        );
    }

    fn on_source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        tracing::debug!(target: "cartolayer", source = %e.id, "source removed");
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use cartolayer_core::MemoryMap;
    use cartolayer_core::ops::{add_line_layer, move_layers};
    use cartolayer_core::style::{LayerBase, LineStyle};
    use cartolayer_core::trace::{Traced, Tracer};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: tracing::Level, f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn add_roads() {
        let mut sink = TracingSink::new();
        let mut map = Traced::new(MemoryMap::new(), Tracer::new(&mut sink));
        let style = LineStyle {
            base: LayerBase::new("roads"),
            color: "red".into(),
            width: 2.0,
        };
        add_line_layer(&mut map, &style).unwrap();
        move_layers(&mut map, "roads", None).unwrap();
    }

    #[test]
    fn structural_changes_log_at_debug() {
        let output = capture(tracing::Level::DEBUG, add_roads);
        assert!(output.contains("layer added"), "got: {output}");
        assert!(output.contains("layer=roads-line"), "got: {output}");
        assert!(output.contains("layer moved"), "got: {output}");
    }

    #[test]
    fn info_level_hides_mutations() {
        let output = capture(tracing::Level::INFO, add_roads);
        assert!(output.is_empty(), "got: {output}");
    }
}
