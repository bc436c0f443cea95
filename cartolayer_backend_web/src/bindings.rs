// Copyright 2026 the Cartolayer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imported MapLibre GL JS methods.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A MapLibre GL JS `Map` instance.
    #[wasm_bindgen(typescript_type = "maplibregl.Map")]
    #[derive(Clone, Debug)]
    pub type JsMap;

    #[wasm_bindgen(method, catch, js_name = "addLayer")]
    pub(crate) fn add_layer(this: &JsMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "removeLayer")]
    pub(crate) fn remove_layer(this: &JsMap, id: &str) -> Result<(), JsValue>;

    /// Returns `undefined` for an unknown id.
    #[wasm_bindgen(method, js_name = "getLayer")]
    pub(crate) fn get_layer(this: &JsMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = "moveLayer")]
    pub(crate) fn move_layer(
        this: &JsMap,
        id: &str,
        before_id: Option<String>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "addSource")]
    pub(crate) fn add_source(this: &JsMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "removeSource")]
    pub(crate) fn remove_source(this: &JsMap, id: &str) -> Result<(), JsValue>;

    /// Returns `undefined` for an unknown id.
    #[wasm_bindgen(method, js_name = "getSource")]
    pub(crate) fn get_source(this: &JsMap, id: &str) -> JsValue;

    /// Throws while the style is still loading.
    #[wasm_bindgen(method, catch, js_name = "getStyle")]
    pub(crate) fn get_style(this: &JsMap) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "setPaintProperty")]
    pub(crate) fn set_paint_property(
        this: &JsMap,
        id: &str,
        name: &str,
        value: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "setLayoutProperty")]
    pub(crate) fn set_layout_property(
        this: &JsMap,
        id: &str,
        name: &str,
        value: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "setFilter")]
    pub(crate) fn set_filter(this: &JsMap, id: &str, filter: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "setLayerZoomRange")]
    pub(crate) fn set_layer_zoom_range(
        this: &JsMap,
        id: &str,
        min_zoom: f64,
        max_zoom: f64,
    ) -> Result<(), JsValue>;
}
