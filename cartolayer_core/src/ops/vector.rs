// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle, line, and polygon layers.
//!
//! | config field | circle | line | polygon fill | polygon outline |
//! |---|---|---|---|---|
//! | fill color / color | `circle-color` | `line-color` | `fill-color` | |
//! | outline color | `circle-stroke-color` | | | `line-color` |
//! | width | `circle-stroke-width` | `line-width` | | `line-width` |
//! | radius | `circle-radius` | | | |
//! | opacity | `circle-opacity` | `line-opacity` | `fill-opacity` | `line-opacity` |

use super::{add_styled_layer, update_styled_layers};
use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{GeometryType, LayerKind, LayerType};
use crate::style::{CircleStyle, LineStyle, PolygonStyle};

/// Adds `<sourceId>-circle`, drawing the source's points.
pub fn add_circle_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &CircleStyle,
) -> Result<String, LayerError> {
    let source_id = &style.base.source_id;
    add_styled_layer(
        map,
        LayerKind::Circle.layer_id(source_id),
        LayerType::Circle,
        source_id,
        Some(GeometryType::Point),
        &style.properties(),
    )
}

/// Rewrites every property of `<sourceId>-circle`.
pub fn update_circle_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &CircleStyle,
) -> Result<String, LayerError> {
    let id = LayerKind::Circle.layer_id(&style.base.source_id);
    update_styled_layers(map, &[(id.as_str(), style.properties().as_slice())])?;
    Ok(id)
}

/// Adds `<sourceId>-line`, drawing the source's line strings.
pub fn add_line_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &LineStyle,
) -> Result<String, LayerError> {
    let source_id = &style.base.source_id;
    add_styled_layer(
        map,
        LayerKind::Line.layer_id(source_id),
        LayerType::Line,
        source_id,
        Some(GeometryType::LineString),
        &style.properties(),
    )
}

/// Rewrites every property of `<sourceId>-line`.
pub fn update_line_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &LineStyle,
) -> Result<String, LayerError> {
    let id = LayerKind::Line.layer_id(&style.base.source_id);
    update_styled_layers(map, &[(id.as_str(), style.properties().as_slice())])?;
    Ok(id)
}

/// Adds `<sourceId>-fill` and then `<sourceId>-fill-outline`.
///
/// The outline is a line layer, since fill layers cannot set a stroke width.
/// Returns the fill layer id.
pub fn add_polygon_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &PolygonStyle,
) -> Result<String, LayerError> {
    let source_id = &style.base.source_id;
    let fill_id = add_styled_layer(
        map,
        LayerKind::Fill.layer_id(source_id),
        LayerType::Fill,
        source_id,
        Some(GeometryType::Polygon),
        &style.fill_properties(),
    )?;
    add_styled_layer(
        map,
        LayerKind::FillOutline.layer_id(source_id),
        LayerType::Line,
        source_id,
        Some(GeometryType::Polygon),
        &style.outline_properties(),
    )?;
    Ok(fill_id)
}

/// Rewrites both polygon layers. Returns the fill layer id.
///
/// If either layer is missing neither is touched.
pub fn update_polygon_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &PolygonStyle,
) -> Result<String, LayerError> {
    let source_id = &style.base.source_id;
    let fill_id = LayerKind::Fill.layer_id(source_id);
    let outline_id = LayerKind::FillOutline.layer_id(source_id);
    let fill = style.fill_properties();
    let outline = style.outline_properties();
    update_styled_layers(
        map,
        &[
            (fill_id.as_str(), fill.as_slice()),
            (outline_id.as_str(), outline.as_slice()),
        ],
    )?;
    Ok(fill_id)
}
