// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for card-ui component tests.
//
// Provides mount/cleanup helpers and a few DOM queries so that individual
// test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use web_sys::Element;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Like [`create_mount_point`], but the `<div>` carries `id`.
pub fn create_mount_point_with_id(id: &str) -> Element {
    let div = create_mount_point();
    div.set_id(id);
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Number of elements under `root` matching `selector`.
pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

/// Text content of every element under `root` matching `selector`, in
/// document order.
pub fn texts(root: &Element, selector: &str) -> Vec<String> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|n| n.text_content().unwrap_or_default())
        .collect()
}

/// Attribute `name` of the `<html>` element.
pub fn html_attribute(name: &str) -> Option<String> {
    gloo_utils::document()
        .document_element()
        .unwrap()
        .get_attribute(name)
}

/// Number of `<style>` elements owned by the style cache `key`.
pub fn style_cache_elements(key: &str) -> u32 {
    gloo_utils::document()
        .query_selector_all(&format!(r#"style[data-style-cache="{key}"]"#))
        .unwrap()
        .length()
}
