// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use cartolayer_core::trace::{
    LayerAddedEvent, LayerMovedEvent, LayerRemovedEvent, PropertyChangedEvent, SourceAddedEvent,
    SourceRemovedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    lines: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, lines: 0 }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // Diagnostics must never fail the map mutation that produced them.
        if self.writer.write_fmt(args).is_ok() && self.writer.write_all(b"\n").is_ok() {
            self.lines += 1;
        }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        self.line(format_args!(
            "[layer:add] id={} type={} source={}",
            e.id,
            e.layer_type.as_str(),
            e.source.unwrap_or("-"),
        ));
    }

    fn on_layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        self.line(format_args!("[layer:remove] id={}", e.id));
    }

    fn on_layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        match e.before {
            Some(before) => self.line(format_args!("[layer:move] id={} before={before}", e.id)),
            None => self.line(format_args!("[layer:move] id={} to=top", e.id)),
        }
    }

    fn on_property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        self.line(format_args!(
            "[property] id={} {}={}",
            e.id,
            e.property.name(),
            e.property.value(),
        ));
    }

    fn on_source_added(&mut self, e: &SourceAddedEvent<'_>) {
        self.line(format_args!(
            "[source:add] id={} type={}",
            e.id,
            e.source.kind()
        ));
    }

    fn on_source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        self.line(format_args!("[source:remove] id={}", e.id));
    }
}

#[cfg(test)]
mod tests {
    use cartolayer_core::layer::{LayerProperty, LayerType, PaintProperty};
    use serde_json::json;

    use super::*;

    #[test]
    fn pretty_print_layer_added() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_layer_added(&LayerAddedEvent {
            id: "parcels-fill",
            layer_type: LayerType::Fill,
            source: Some("parcels"),
        });
        assert_eq!(sink.lines(), 1);
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(output, "[layer:add] id=parcels-fill type=fill source=parcels\n");
    }

    #[test]
    fn pretty_print_property_and_move() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_property_changed(&PropertyChangedEvent {
            id: "roads-line",
            property: &LayerProperty::Paint(PaintProperty::LineColor, json!("red")),
        });
        sink.on_layer_moved(&LayerMovedEvent {
            id: "roads-line",
            before: None,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(
            output.contains(r#"[property] id=roads-line line-color="red""#),
            "got: {output}"
        );
        assert!(output.ends_with("to=top\n"), "got: {output}");
    }
}
