// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic layer ids and logical-layer membership.

use super::spec::LayerSpec;

/// Separator between a map-layer id and an external style-layer id.
///
/// See [`style_layer_id`].
pub const STYLE_LAYER_SEPARATOR: char = '_';

/// The engine layers a logical layer can expand into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Point features drawn as circles.
    Circle,
    /// Line features.
    Line,
    /// Polygon interiors.
    Fill,
    /// Polygon boundaries, drawn as a line layer.
    FillOutline,
    /// Labels.
    Symbol,
}

impl LayerKind {
    /// Every kind, in the order their suffixes are checked.
    pub const ALL: [Self; 5] = [
        Self::Circle,
        Self::Line,
        Self::Fill,
        Self::FillOutline,
        Self::Symbol,
    ];

    /// Returns the id suffix appended to the source id.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Circle => "-circle",
            Self::Line => "-line",
            Self::Fill => "-fill",
            Self::FillOutline => "-fill-outline",
            Self::Symbol => "-symbol",
        }
    }

    /// Returns the layer id for this kind on `source_id`.
    ///
    /// ```
    /// use cartolayer_core::layer::LayerKind;
    ///
    /// assert_eq!(LayerKind::FillOutline.layer_id("parcels"), "parcels-fill-outline");
    /// ```
    #[must_use]
    pub fn layer_id(self, source_id: &str) -> String {
        format!("{source_id}{}", self.suffix())
    }
}

/// Composes the id of an external style layer owned by `map_layer_id`.
///
/// The result is `"<mapLayerId>_<styleLayerId>"`. For a fixed map-layer id
/// distinct style-layer ids give distinct results.
#[must_use]
pub fn style_layer_id(map_layer_id: &str, style_layer_id: &str) -> String {
    format!("{map_layer_id}{STYLE_LAYER_SEPARATOR}{style_layer_id}")
}

/// Returns whether `layer_id` is `group_id` itself or one of its compound ids.
///
/// Compound ids are `group_id` followed by a [`LayerKind`] suffix, or by
/// [`STYLE_LAYER_SEPARATOR`] and a non-empty style-layer id. Any other
/// continuation, such as the `1` in `layer-11` versus `layer-1`, is a
/// different layer.
#[must_use]
pub fn matches_layer_id(layer_id: &str, group_id: &str) -> bool {
    let Some(rest) = layer_id.strip_prefix(group_id) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    if LayerKind::ALL.iter().any(|kind| rest == kind.suffix()) {
        return true;
    }
    rest.strip_prefix(STYLE_LAYER_SEPARATOR)
        .is_some_and(|style_id| !style_id.is_empty())
}

/// Returns whether `layer` belongs to the logical map layer `group_id`.
///
/// A layer belongs when its id [matches](matches_layer_id) or when it draws
/// from the source named `group_id`.
#[must_use]
pub fn is_group_member(layer: &LayerSpec, group_id: &str) -> bool {
    matches_layer_id(&layer.id, group_id) || layer.source.as_deref() == Some(group_id)
}
