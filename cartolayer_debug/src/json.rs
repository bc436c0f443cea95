// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes events recorded by a
//! [`RecorderSink`](crate::recorder::RecorderSink) as one JSON array, one
//! object per event:
//!
//! ```text
//! [
//!   { "seq": 0, "event": "SourceAdded", "id": "parcels", "args": { "type": "geojson" } },
//!   { "seq": 1, "event": "LayerAdded", "id": "parcels-fill", "args": { "type": "fill", "source": "parcels" } },
//!   ...
//! ]
//! ```

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    let args = match event {
        RecordedEvent::LayerAdded {
            layer_type, source, ..
        } => json!({ "type": layer_type.as_str(), "source": source }),
        RecordedEvent::LayerMoved { before, .. } => json!({ "before": before }),
        RecordedEvent::PropertyChanged {
            property, value, ..
        } => json!({ "property": property, "value": value }),
        RecordedEvent::SourceAdded { kind, .. } => json!({ "type": kind }),
        RecordedEvent::LayerRemoved { .. } | RecordedEvent::SourceRemoved { .. } => json!({}),
    };
    json!({
        "seq": seq,
        "event": event.name(),
        "id": event.target(),
        "args": args,
    })
}

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use cartolayer_core::layer::LayerType;

    use super::*;

    fn sample() -> Vec<RecordedEvent> {
        vec![
            RecordedEvent::SourceAdded {
                id: "parcels".into(),
                kind: "geojson",
            },
            RecordedEvent::LayerAdded {
                id: "parcels-fill".into(),
                layer_type: LayerType::Fill,
                source: Some("parcels".into()),
            },
            RecordedEvent::LayerMoved {
                id: "parcels-fill".into(),
                before: None,
            },
            RecordedEvent::LayerRemoved {
                id: "parcels-fill".into(),
            },
        ]
    }

    #[test]
    fn export_writes_one_object_per_event() {
        let mut out = Vec::<u8>::new();
        export(&sample(), &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let events = parsed.as_array().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[1],
            json!({
                "seq": 1,
                "event": "LayerAdded",
                "id": "parcels-fill",
                "args": { "type": "fill", "source": "parcels" }
            })
        );
        assert_eq!(events[2]["args"]["before"], Value::Null);
        assert_eq!(events[3]["args"], json!({}));
    }

    #[test]
    fn export_of_nothing_is_an_empty_array() {
        let mut out = Vec::<u8>::new();
        export(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
