// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source definitions.
//!
//! A source is a named data provider layers draw from. The core registers
//! sources but never fetches from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A source definition in style-document shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceSpec {
    /// Vector tiles, from a TileJSON `url` or explicit `tiles` templates.
    Vector {
        /// TileJSON document URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Tile URL templates.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tiles: Vec<String>,
    },
    /// Raster tiles.
    Raster {
        /// TileJSON document URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Tile URL templates.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tiles: Vec<String>,
        /// Tile edge length in pixels.
        #[serde(rename = "tileSize", default, skip_serializing_if = "Option::is_none")]
        tile_size: Option<u32>,
    },
    /// Inline or remote GeoJSON.
    GeoJson {
        /// A GeoJSON object or a URL string.
        data: Value,
    },
}

impl SourceSpec {
    /// A vector source described by the TileJSON document at `url`.
    #[must_use]
    pub fn vector_url(url: impl Into<String>) -> Self {
        Self::Vector {
            url: Some(url.into()),
            tiles: Vec::new(),
        }
    }

    /// A GeoJSON source.
    #[must_use]
    pub fn geojson(data: Value) -> Self {
        Self::GeoJson { data }
    }

    /// Returns the style-document `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Vector { .. } => "vector",
            Self::Raster { .. } => "raster",
            Self::GeoJson { .. } => "geojson",
        }
    }
}
