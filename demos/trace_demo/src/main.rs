// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offline map session that exercises the tracing and diagnostics pipeline.
//!
//! Builds a base map and a labelled GeoJSON document layer on a
//! [`MemoryMap`], then reorders, hides, and removes them. Every mutation is
//! reported to a [`PrettyPrintSink`], a [`RecorderSink`], and a
//! [`TracingSink`]; the recording is exported to `trace.json`.
//!
//! Set `RUST_LOG=cartolayer=trace` to see property writes in the log too.

use std::fs::File;
use std::io::{BufWriter, Write};

use cartolayer_core::MemoryMap;
use cartolayer_core::layer::Visibility;
use cartolayer_core::ops::{
    DocumentLayerStyle, LabelStyle, OsmLayerSpec, StyleDocument, add_document_layer,
    add_osm_base_map, move_layers, remove_layers, update_document_layer, update_layer_visibility,
};
use cartolayer_core::trace::{
    LayerAddedEvent, LayerMovedEvent, LayerRemovedEvent, PropertyChangedEvent, SourceAddedEvent,
    SourceRemovedEvent, TraceSink, Traced, Tracer,
};
use cartolayer_debug::pretty::PrettyPrintSink;
use cartolayer_debug::recorder::RecorderSink;
use cartolayer_debug::tracing_sink::TracingSink;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const BASE_MAP_STYLE: &str = r##"{
  "version": 8,
  "name": "Demo",
  "sources": {
    "openmaptiles": { "type": "vector", "url": "https://tiles.example.com/planet.json" }
  },
  "layers": [
    { "id": "background", "type": "background", "paint": { "background-color": "#f8f4f0" } },
    {
      "id": "water",
      "type": "fill",
      "source": "openmaptiles",
      "source-layer": "water",
      "paint": { "fill-color": "#a0c8f0" }
    },
    {
      "id": "roads",
      "type": "line",
      "source": "openmaptiles",
      "source-layer": "transportation",
      "paint": { "line-color": "#ffffff", "line-width": 1.5 }
    }
  ]
}"##;

/// Forwards every event to each of several sinks.
struct Fanout<'a>(Vec<&'a mut dyn TraceSink>);

impl TraceSink for Fanout<'_> {
    fn on_layer_added(&mut self, e: &LayerAddedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_layer_added(e));
    }

    fn on_layer_removed(&mut self, e: &LayerRemovedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_layer_removed(e));
    }

    fn on_layer_moved(&mut self, e: &LayerMovedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_layer_moved(e));
    }

    fn on_property_changed(&mut self, e: &PropertyChangedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_property_changed(e));
    }

    fn on_source_added(&mut self, e: &SourceAddedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_source_added(e));
    }

    fn on_source_removed(&mut self, e: &SourceRemovedEvent<'_>) {
        self.0.iter_mut().for_each(|sink| sink.on_source_removed(e));
    }
}

fn base_map() -> OsmLayerSpec {
    serde_json::from_value(json!({
        "id": "osm",
        "name": "OpenStreetMap",
        "zoomRange": [0, 18],
        "opacity": 80,
        "visibility": "visible",
        "source": { "dataURL": "https://tiles.example.com/planet.json" },
        "style": { "styleURL": "https://tiles.example.com/style.json" }
    }))
    .expect("built-in base map config parses")
}

fn parcels() -> DocumentLayerStyle {
    serde_json::from_value(json!({
        "sourceId": "parcels",
        "opacity": 70,
        "fillColor": "#E7298A",
        "borderColor": "#7570B3",
        "borderThickness": 1,
        "markerSize": 5
    }))
    .expect("built-in document style parses")
}

fn parcels_data() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-122.42, 37.77], [-122.41, 37.77], [-122.41, 37.78], [-122.42, 37.77]]]
                },
                "properties": { "name": "Lot 7" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-122.415, 37.775] },
                "properties": { "name": "Well" }
            }
        ]
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cartolayer=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();
    let mut logger = TracingSink::new();
    let mut fanout = Fanout(vec![
        &mut pretty as &mut dyn TraceSink,
        &mut recorder,
        &mut logger,
    ]);

    let mut map = Traced::new(MemoryMap::new(), Tracer::new(&mut fanout));

    // -- build -------------------------------------------------------------
    let style = StyleDocument::from_json(BASE_MAP_STYLE).expect("built-in style parses");
    let base = base_map();
    add_osm_base_map(&mut map, &base, &style).expect("failed to add base map");

    let mut doc = parcels();
    add_document_layer(&mut map, &doc, parcels_data()).expect("failed to add parcels");

    let label: LabelStyle = serde_json::from_value(json!({
        "textType": "by_field",
        "textByField": "name",
        "size": 12,
        "color": "#000000",
        "borderColor": "#FFFFFF",
        "borderWidth": 1
    }))
    .expect("built-in label parses");
    doc.label = Some(label);
    update_document_layer(&mut map, &doc).expect("failed to label parcels");

    // -- rearrange ---------------------------------------------------------
    move_layers(&mut map, "parcels", Some("osm")).expect("failed to move parcels");
    move_layers(&mut map, "osm", None).expect("failed to move base map");
    update_layer_visibility(&mut map, "osm", Visibility::Hidden).expect("failed to hide base map");
    remove_layers(&mut map, "parcels", true).expect("failed to remove parcels");

    let map = map.into_inner();
    println!(
        "{} layers left, {} events recorded",
        map.len(),
        recorder.len()
    );

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    cartolayer_debug::json::export(recorder.events(), &mut writer).expect("failed to write trace");
    writer.flush().expect("failed to flush trace");

    println!("Wrote {path}");
}
