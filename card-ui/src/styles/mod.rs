// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global style injection.
//!
//! A [`StyleCache`] owns one `<style>` element in `<head>`, keyed by
//! [`STYLE_CACHE_KEY`]. When the cache runs right-to-left it mirrors every
//! declaration before writing it out.

pub mod global;
pub mod rtl;
pub mod sheet;

use once_cell::sync::Lazy;
use web_sys::Document;

use crate::constants::{STYLE_CACHE_ATTR, STYLE_CACHE_KEY};
use crate::error::MountError;
use crate::theme::{theme, Direction};

pub use sheet::{Rule, StyleSheet};

#[derive(Clone, Debug, PartialEq)]
pub struct StyleCache {
    key: &'static str,
    direction: Direction,
    /// Insert before existing `<head>` children so page-level CSS still wins.
    prepend: bool,
}

impl StyleCache {
    pub fn new(key: &'static str, direction: Direction) -> Self {
        Self {
            key,
            direction,
            prepend: true,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// CSS text for `sheet`, mirrored when the cache is right-to-left.
    pub fn serialize(&self, sheet: &StyleSheet) -> String {
        if self.direction.is_rtl() {
            rtl::mirror(sheet).to_string()
        } else {
            sheet.to_string()
        }
    }

    fn selector(&self) -> String {
        format!(r#"style[{STYLE_CACHE_ATTR}="{}"]"#, self.key)
    }

    /// Whether this cache already owns a `<style>` element in `document`.
    pub fn is_installed(&self, document: &Document) -> bool {
        matches!(document.query_selector(&self.selector()), Ok(Some(_)))
    }

    /// Write `sheet` into `document` once.
    ///
    /// Returns `Ok(false)` without touching the document when the cache's
    /// element is already present.
    pub fn insert(&self, document: &Document, sheet: &StyleSheet) -> Result<bool, MountError> {
        if self.is_installed(document) {
            log::debug!("Style cache '{}' already installed", self.key);
            return Ok(false);
        }

        let head = document
            .head()
            .ok_or_else(|| MountError::Dom("document has no <head>".to_string()))?;
        let style = document
            .create_element("style")
            .map_err(|e| MountError::dom("create <style>", e))?;
        style
            .set_attribute(STYLE_CACHE_ATTR, self.key)
            .map_err(|e| MountError::dom("tag <style>", e))?;
        style.set_text_content(Some(&self.serialize(sheet)));

        if self.prepend {
            head.prepend_with_node_1(&style)
                .map_err(|e| MountError::dom("prepend <style>", e))?;
        } else {
            head.append_child(&style)
                .map_err(|e| MountError::dom("append <style>", e))?;
        }

        log::debug!(
            "Installed style cache '{}' ({})",
            self.key,
            self.direction
        );
        Ok(true)
    }
}

static STYLE_CACHE: Lazy<StyleCache> =
    Lazy::new(|| StyleCache::new(STYLE_CACHE_KEY, theme().direction));

/// The process-wide style cache, configured for the theme's direction.
pub fn style_cache() -> &'static StyleCache {
    Lazy::force(&STYLE_CACHE)
}

/// Inject the page stylesheet through the shared cache.
pub fn install_global_styles(document: &Document) -> Result<bool, MountError> {
    let sheet = global::page_stylesheet(theme());
    style_cache().insert(document, &sheet)
}
