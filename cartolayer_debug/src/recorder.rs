// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and copies every event into a
//! [`RecordedEvent`], in arrival order. The recording outlives the map
//! mutation that produced it and can be inspected, asserted on, or exported
//! with [`json::export`](crate::json::export).

use cartolayer_core::layer::LayerType;
use cartolayer_core::trace::{
    LayerAddedEvent, LayerMovedEvent, LayerRemovedEvent, PropertyChangedEvent, SourceAddedEvent,
    SourceRemovedEvent, TraceSink,
};
use serde_json::Value;

/// One recorded event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`LayerAddedEvent`].
    LayerAdded {
        /// Layer id.
        id: String,
        /// Layer type.
        layer_type: LayerType,
        /// Source the layer draws from.
        source: Option<String>,
    },
    /// A [`LayerRemovedEvent`].
    LayerRemoved {
        /// Layer id.
        id: String,
    },
    /// A [`LayerMovedEvent`].
    LayerMoved {
        /// Layer id.
        id: String,
        /// Layer it now sits beneath; `None` for the top.
        before: Option<String>,
    },
    /// A [`PropertyChangedEvent`].
    PropertyChanged {
        /// Layer id.
        id: String,
        /// Property name, as returned by
        /// [`LayerProperty::name`](cartolayer_core::layer::LayerProperty::name).
        property: &'static str,
        /// Written value.
        value: Value,
    },
    /// A [`SourceAddedEvent`].
    SourceAdded {
        /// Source id.
        id: String,
        /// Source type tag.
        kind: &'static str,
    },
    /// A [`SourceRemovedEvent`].
    SourceRemoved {
        /// Source id.
        id: String,
    },
}

impl RecordedEvent {
    /// Returns a short event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LayerAdded { .. } => "LayerAdded",
            Self::LayerRemoved { .. } => "LayerRemoved",
            Self::LayerMoved { .. } => "LayerMoved",
            Self::PropertyChanged { .. } => "PropertyChanged",
            Self::SourceAdded { .. } => "SourceAdded",
            Self::SourceRemoved { .. } => "SourceRemoved",
        }
    }

    /// Returns the id of the layer or source the event is about.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::LayerAdded { id, .. }
            | Self::LayerRemoved { id }
            | Self::LayerMoved { id, .. }
            | Self::PropertyChanged { id, .. }
            | Self::SourceAdded { id, .. }
            | Self::SourceRemoved { id } => id,
        }
    }
}

/// A [`TraceSink`] that keeps an owned copy of every event.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        self.events.push(RecordedEvent::LayerAdded {
            id: e.id.to_owned(),
            layer_type: e.layer_type,
            source: e.source.map(str::to_owned),
        });
    }

    fn on_layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        self.events.push(RecordedEvent::LayerRemoved {
            id: e.id.to_owned(),
        });
    }

    fn on_layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        self.events.push(RecordedEvent::LayerMoved {
            id: e.id.to_owned(),
            before: e.before.map(str::to_owned),
        });
    }

    fn on_property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        self.events.push(RecordedEvent::PropertyChanged {
            id: e.id.to_owned(),
            property: e.property.name(),
            value: e.property.value(),
        });
    }

    fn on_source_added(&mut self, e: &SourceAddedEvent<'_>) {
        self.events.push(RecordedEvent::SourceAdded {
            id: e.id.to_owned(),
            kind: e.source.kind(),
        });
    }

    fn on_source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        self.events.push(RecordedEvent::SourceRemoved {
            id: e.id.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use cartolayer_core::MemoryMap;
    use cartolayer_core::layer::Visibility;
    use cartolayer_core::ops::{add_polygon_layer, remove_layers, update_layer_visibility};
    use cartolayer_core::style::{LayerBase, PolygonStyle};
    use cartolayer_core::trace::{Traced, Tracer};
    use serde_json::json;

    use super::*;

    fn polygon() -> PolygonStyle {
        PolygonStyle {
            base: LayerBase::new("parcels"),
            fill_color: "red".into(),
            outline_color: "green".into(),
            width: 2.0,
        }
    }

    #[test]
    fn records_operations_in_order() {
        let mut rec = RecorderSink::new();
        let mut traced = Traced::new(MemoryMap::new(), Tracer::new(&mut rec));
        add_polygon_layer(&mut traced, &polygon()).unwrap();
        update_layer_visibility(&mut traced, "parcels", Visibility::Hidden).unwrap();
        remove_layers(&mut traced, "parcels", false).unwrap();
        drop(traced);

        let added: Vec<_> = rec
            .events()
            .iter()
            .filter(|e| e.name() == "LayerAdded")
            .map(RecordedEvent::target)
            .collect();
        assert_eq!(added, ["parcels-fill", "parcels-fill-outline"]);

        let hidden = rec
            .events()
            .iter()
            .filter(|e| {
                matches!(e, RecordedEvent::PropertyChanged { property: "visibility", value, .. }
                    if *value == json!("none"))
            })
            .count();
        assert_eq!(hidden, 2, "both polygon layers hidden");

        assert_eq!(
            rec.events().last(),
            Some(&RecordedEvent::LayerRemoved {
                id: "parcels-fill-outline".into()
            })
        );
    }

    #[test]
    fn failed_mutations_are_not_recorded() {
        let mut rec = RecorderSink::new();
        let mut traced = Traced::new(MemoryMap::new(), Tracer::new(&mut rec));
        add_polygon_layer(&mut traced, &polygon()).unwrap();
        assert!(add_polygon_layer(&mut traced, &polygon()).is_err());
        drop(traced);

        let adds = rec.events().iter().filter(|e| e.name() == "LayerAdded").count();
        assert_eq!(adds, 2);
    }

    #[test]
    fn clear_empties_the_recording() {
        let mut rec = RecorderSink::new();
        rec.on_layer_removed(&LayerRemovedEvent { id: "a" });
        assert_eq!(rec.len(), 1);
        rec.clear();
        assert!(rec.is_empty());
    }
}
