// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time configuration for the landing page.
//!
//! Nothing here is read from the environment at runtime; change a value and
//! rebuild.

use crate::theme::Direction;

/// Id of the host-document element the application is mounted into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Language written to `<html lang>` on startup.
pub const LOCALE: &str = "fa";

/// Text direction written to `<html dir>` on startup.
pub const DIRECTION: Direction = Direction::Rtl;

/// Key of the global style cache. Also used as the `data-style-cache`
/// attribute value on the injected `<style>` element.
pub const STYLE_CACHE_KEY: &str = "mui-rtl";

/// Attribute that marks a `<style>` element owned by a style cache.
pub const STYLE_CACHE_ATTR: &str = "data-style-cache";

// Breakpoints, in px, matching the usual xs/sm/md/lg scale.
pub const BREAKPOINT_SM: u32 = 600;
pub const BREAKPOINT_MD: u32 = 900;
pub const BREAKPOINT_LG: u32 = 1200;

/// Max width of the centered content container.
pub const CONTAINER_MAX_WIDTH: u32 = BREAKPOINT_LG;

/// Brand shown in the header.
pub const BRAND_LABEL: &str = "ایران‌پروس کارت";
