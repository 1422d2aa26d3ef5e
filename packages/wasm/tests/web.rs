//! Runs under `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use sitebuilder_wasm::{apply_content_edit_js, section_catalog_js};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn catalog_lists_six_templates() {
    let json = section_catalog_js().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), 6);
}

#[wasm_bindgen_test]
fn content_edit_errors_become_js_values() {
    let section = r#"{ "id": "h", "type": "hero", "order": 0 }"#;
    let edit = r#"{ "op": "setField", "key": "overlayOpacity", "value": "lots" }"#;

    let err = apply_content_edit_js(section, edit).unwrap_err();
    assert!(err.as_string().unwrap().contains("hero"));

    let ok = apply_content_edit_js(section, r#"{ "op": "setField", "key": "ctaText", "value": "Go" }"#).unwrap();
    assert!(ok.contains("\"ctaText\":\"Go\""));
}
