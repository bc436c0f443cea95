// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GeoJSON document layers.
//!
//! A document layer draws a GeoJSON source with one style for every
//! geometry type it may contain. It expands into these engine layers,
//! bottom first:
//!
//! ```text
//!   <id>-fill          polygons
//!   <id>-fill-outline  polygon borders
//!   <id>-line          lines
//!   <id>-circle        points
//!   <id>-symbol        labels (only while a label is configured)
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::symbol::add_symbol_layer;
use super::update_styled_layers;
use super::vector::{add_circle_layer, add_line_layer, add_polygon_layer};
use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{LayerKind, LayerProperty};
use crate::source::SourceSpec;
use crate::style::{CircleStyle, LayerBase, LineStyle, PolygonStyle, SymbolStyle, TextType};

fn default_text_font() -> Vec<String> {
    vec!["Noto Sans Regular".to_owned()]
}

/// Label settings of a document layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    /// Which of the two text fields is used.
    #[serde(default)]
    pub text_type: TextType,
    /// Literal label text.
    #[serde(default)]
    pub text_by_fixed: String,
    /// Feature property providing the label text.
    #[serde(default)]
    pub text_by_field: String,
    /// Font stack.
    #[serde(default = "default_text_font")]
    pub font: Vec<String>,
    /// Font size in pixels.
    pub size: f64,
    /// Text color.
    pub color: String,
    /// Halo color.
    pub border_color: String,
    /// Halo width in pixels.
    pub border_width: f64,
}

/// Style of a GeoJSON document layer.
///
/// `base.source_id` is the document layer id: the GeoJSON source is
/// registered under it and every engine layer derives its id from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLayerStyle {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LayerBase,
    /// Polygon interior and line color; also the marker fill.
    pub fill_color: String,
    /// Polygon border and marker outline color.
    pub border_color: String,
    /// Line width, polygon border width, and marker outline width.
    pub border_thickness: f64,
    /// Marker radius in pixels.
    pub marker_size: f64,
    /// Label settings; `None` draws no labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelStyle>,
}

impl DocumentLayerStyle {
    /// Returns the style of the point layer.
    #[must_use]
    pub fn circle_style(&self) -> CircleStyle {
        CircleStyle {
            base: self.base.clone(),
            fill_color: self.fill_color.clone(),
            outline_color: self.border_color.clone(),
            radius: self.marker_size,
            width: self.border_thickness,
        }
    }

    /// Returns the style of the line layer.
    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            base: self.base.clone(),
            color: self.fill_color.clone(),
            width: self.border_thickness,
        }
    }

    /// Returns the style of the polygon layers.
    #[must_use]
    pub fn polygon_style(&self) -> PolygonStyle {
        PolygonStyle {
            base: self.base.clone(),
            fill_color: self.fill_color.clone(),
            outline_color: self.border_color.clone(),
            width: self.border_thickness,
        }
    }

    /// Returns the style of the label layer, if labels are configured.
    #[must_use]
    pub fn symbol_style(&self) -> Option<SymbolStyle> {
        let label = self.label.as_ref()?;
        Some(SymbolStyle {
            base: self.base.clone(),
            text_type: label.text_type,
            text_by_fixed: label.text_by_fixed.clone(),
            text_by_field: label.text_by_field.clone(),
            text_font: label.font.clone(),
            text_size: label.size,
            text_color: label.color.clone(),
            symbol_border_width: label.border_width,
            symbol_border_color: label.border_color.clone(),
        })
    }
}

/// Registers a GeoJSON source. `data` is a GeoJSON object or a URL string.
pub fn add_geojson_source<M: MapHandle + ?Sized>(
    map: &mut M,
    source_id: &str,
    data: Value,
) -> Result<(), LayerError> {
    map.add_source(source_id, SourceSpec::geojson(data))?;
    Ok(())
}

/// Registers the document's source and its engine layers. Returns the layer
/// ids, bottom first.
pub fn add_document_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &DocumentLayerStyle,
    data: Value,
) -> Result<Vec<String>, LayerError> {
    add_geojson_source(map, &style.base.source_id, data)?;
    let polygon = add_polygon_layer(map, &style.polygon_style())?;
    let mut ids = vec![
        polygon,
        LayerKind::FillOutline.layer_id(&style.base.source_id),
        add_line_layer(map, &style.line_style())?,
        add_circle_layer(map, &style.circle_style())?,
    ];
    if let Some(symbol) = style.symbol_style() {
        ids.push(add_symbol_layer(map, &symbol)?);
    }
    Ok(ids)
}

/// Rewrites the document's engine layers. Returns the layer ids present
/// afterwards, bottom first.
///
/// Every existing layer is checked before the first write, so a missing
/// one returns [`LayerError::NotFound`] with the map untouched. The label
/// layer is added when a label was switched on and removed when it was
/// switched off.
pub fn update_document_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &DocumentLayerStyle,
) -> Result<Vec<String>, LayerError> {
    let source_id = &style.base.source_id;
    let polygon = style.polygon_style();
    let ids = [
        LayerKind::Fill.layer_id(source_id),
        LayerKind::FillOutline.layer_id(source_id),
        LayerKind::Line.layer_id(source_id),
        LayerKind::Circle.layer_id(source_id),
    ];
    let properties = [
        polygon.fill_properties(),
        polygon.outline_properties(),
        style.line_style().properties(),
        style.circle_style().properties(),
    ];

    let symbol_id = LayerKind::Symbol.layer_id(source_id);
    let symbol = style.symbol_style();
    let symbol_properties = symbol.as_ref().map(SymbolStyle::properties);
    let has_symbol = map.has_layer(&symbol_id);

    let mut updates: Vec<(&str, &[LayerProperty])> = ids
        .iter()
        .zip(&properties)
        .map(|(id, props)| (id.as_str(), props.as_slice()))
        .collect();
    if let Some(props) = symbol_properties.as_ref().filter(|_| has_symbol) {
        updates.push((symbol_id.as_str(), props.as_slice()));
    }
    update_styled_layers(map, &updates)?;

    let mut ids = Vec::from(ids);
    match symbol {
        Some(_) if has_symbol => ids.push(symbol_id),
        Some(symbol) => ids.push(add_symbol_layer(map, &symbol)?),
        None if has_symbol => map.remove_layer(&symbol_id)?,
        None => {}
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::layer::{LayoutProperty, PaintProperty, Visibility};
    use crate::memory::MemoryMap;
    use crate::ops::{get_layers, remove_layers};

    fn style() -> DocumentLayerStyle {
        serde_json::from_value(json!({
            "sourceId": "b5a1",
            "visibility": "visible",
            "minZoom": 0,
            "maxZoom": 22,
            "opacity": 70,
            "fillColor": "#E7298A",
            "borderColor": "#7570B3",
            "borderThickness": 1,
            "markerSize": 5
        }))
        .unwrap()
    }

    fn label() -> LabelStyle {
        serde_json::from_value(json!({
            "textType": "by_field",
            "textByField": "name",
            "size": 15,
            "color": "#000000",
            "borderColor": "#FFFFFF",
            "borderWidth": 0
        }))
        .unwrap()
    }

    fn points() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-122.4, 37.8] },
                "properties": { "name": "a" }
            }]
        })
    }

    #[test]
    fn adds_source_and_layers() {
        let mut map = MemoryMap::new();
        let ids = add_document_layer(&mut map, &style(), points()).unwrap();
        assert_eq!(
            ids,
            ["b5a1-fill", "b5a1-fill-outline", "b5a1-line", "b5a1-circle"]
        );
        assert_eq!(map.layer_ids(), ids);
        assert_eq!(map.source("b5a1"), Some(SourceSpec::geojson(points())));

        let circle = map.get("b5a1-circle").unwrap();
        assert_eq!(circle.paint_value(PaintProperty::CircleRadius), Some(&json!(5.0)));
        assert_eq!(
            circle.paint_value(PaintProperty::CircleStrokeColor),
            Some(&json!("#7570B3"))
        );
        assert_eq!(circle.paint_value(PaintProperty::CircleOpacity), Some(&json!(0.7)));
    }

    #[test]
    fn label_adds_symbol_layer_with_default_font() {
        let mut map = MemoryMap::new();
        let mut style = style();
        style.label = Some(label());
        let ids = add_document_layer(&mut map, &style, points()).unwrap();
        assert_eq!(ids.last().map(String::as_str), Some("b5a1-symbol"));

        let symbol = map.get("b5a1-symbol").unwrap();
        assert_eq!(symbol.layout_value(LayoutProperty::TextField), Some(&json!("name")));
        assert_eq!(
            symbol.layout_value(LayoutProperty::TextFont),
            Some(&json!(["Noto Sans Regular"]))
        );
    }

    #[test]
    fn update_toggles_label_layer() {
        let mut map = MemoryMap::new();
        let mut style = style();
        add_document_layer(&mut map, &style, points()).unwrap();

        style.label = Some(label());
        let ids = update_document_layer(&mut map, &style).unwrap();
        assert_eq!(ids.len(), 5);
        assert!(map.has_layer("b5a1-symbol"), "label switched on");

        style.base.visibility = Visibility::Hidden;
        update_document_layer(&mut map, &style).unwrap();
        assert_eq!(
            map.get("b5a1-symbol").unwrap().visibility(),
            Visibility::Hidden
        );

        style.label = None;
        let ids = update_document_layer(&mut map, &style).unwrap();
        assert_eq!(ids.len(), 4);
        assert!(!map.has_layer("b5a1-symbol"), "label switched off");
        assert!(
            get_layers(&map, "b5a1")
                .iter()
                .all(|layer| layer.visibility() == Visibility::Hidden),
            "every layer follows the document visibility"
        );
    }

    #[test]
    fn update_before_add_is_not_found() {
        let mut map = MemoryMap::new();
        assert_eq!(
            update_document_layer(&mut map, &style()),
            Err(LayerError::NotFound("b5a1-fill".into()))
        );
    }

    #[test]
    fn update_with_a_missing_layer_changes_nothing() {
        let mut map = MemoryMap::new();
        let mut style = style();
        add_document_layer(&mut map, &style, points()).unwrap();
        map.remove_layer("b5a1-line").unwrap();
        let before = map.clone();

        style.fill_color = "blue".into();
        style.label = Some(label());
        assert_eq!(
            update_document_layer(&mut map, &style),
            Err(LayerError::NotFound("b5a1-line".into()))
        );
        assert_eq!(
            map.get("b5a1-fill").unwrap().paint_value(PaintProperty::FillColor),
            Some(&json!("#E7298A")),
            "fill must keep its color"
        );
        assert!(!map.has_layer("b5a1-symbol"), "no label layer added");
        assert_eq!(map.layers(), before.layers());
    }

    #[test]
    fn removing_with_source_clears_everything() {
        let mut map = MemoryMap::new();
        let mut style = style();
        style.label = Some(label());
        add_document_layer(&mut map, &style, points()).unwrap();

        remove_layers(&mut map, "b5a1", true).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.source("b5a1"), None);
    }
}
