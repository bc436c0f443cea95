// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label layers.

use super::{add_styled_layer, update_styled_layers};
use crate::error::LayerError;
use crate::handle::MapHandle;
use crate::layer::{LayerKind, LayerType};
use crate::style::SymbolStyle;

/// Adds `<sourceId>-symbol`.
///
/// The label text is resolved from the config's text type; see
/// [`SymbolStyle::text_field`].
pub fn add_symbol_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &SymbolStyle,
) -> Result<String, LayerError> {
    let source_id = &style.base.source_id;
    add_styled_layer(
        map,
        LayerKind::Symbol.layer_id(source_id),
        LayerType::Symbol,
        source_id,
        None,
        &style.properties(),
    )
}

/// Rewrites every property of `<sourceId>-symbol`, re-resolving the text.
pub fn update_symbol_layer<M: MapHandle + ?Sized>(
    map: &mut M,
    style: &SymbolStyle,
) -> Result<String, LayerError> {
    let id = LayerKind::Symbol.layer_id(&style.base.source_id);
    update_styled_layers(map, &[(id.as_str(), style.properties().as_slice())])?;
    Ok(id)
}
