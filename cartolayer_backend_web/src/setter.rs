// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of typed property writes into MapLibre setter calls.

use cartolayer_core::layer::LayerProperty;
use serde_json::Value;

/// The MapLibre setter a [`LayerProperty`] write goes through.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SetterCall {
    /// `setPaintProperty(id, name, value)`
    Paint { name: &'static str, value: Value },
    /// `setLayoutProperty(id, name, value)`
    Layout { name: &'static str, value: Value },
    /// `setFilter(id, filter)`; `None` clears the filter.
    Filter(Option<Value>),
    /// `setLayerZoomRange(id, min, max)`
    ZoomRange { min: f64, max: f64 },
}

impl SetterCall {
    pub(crate) fn for_property(property: &LayerProperty) -> Self {
        match property {
            LayerProperty::Visibility(visibility) => Self::Layout {
                name: "visibility",
                value: Value::from(visibility.as_str()),
            },
            LayerProperty::ZoomRange(range) => Self::ZoomRange {
                min: range.min,
                max: range.max,
            },
            LayerProperty::Filter(filter) => Self::Filter(filter.clone()),
            LayerProperty::Paint(key, value) => Self::Paint {
                name: key.key(),
                value: value.clone(),
            },
            LayerProperty::Layout(key, value) => Self::Layout {
                name: key.key(),
                value: value.clone(),
            },
        }
    }
}
