/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Application shell: attaches the page to the host document.
//!
//! Startup order is fixed:
//! 1. resolve the mount element (fatal if missing, nothing else is touched),
//! 2. install the global stylesheet through the style cache,
//! 3. render [`AppRoot`],
//! 4. set `lang`/`dir` on `<html>`, once per process.

use std::sync::Once;

use web_sys::Document;
use yew::prelude::*;
use yew::AppHandle;

use crate::constants::{LOCALE, ROOT_ELEMENT_ID};
use crate::error::MountError;
use crate::pages::landing::LandingPage;
use crate::styles;
use crate::theme::{theme, Theme};

#[derive(Properties, Debug, PartialEq)]
pub struct AppRootProps {
    pub theme: &'static Theme,
}

/// Top of the component tree. The theme is handed down explicitly.
#[function_component(AppRoot)]
pub fn app_root(props: &AppRootProps) -> Html {
    html! {
        <LandingPage theme={props.theme} />
    }
}

static DOCUMENT_PREPARED: Once = Once::new();

/// Write the page locale and direction onto the document's root element.
///
/// Only the first call in a process touches the document; it returns
/// `true`. Every later call is a no-op returning `false`.
pub fn prepare_document(document: &Document) -> bool {
    let mut applied = false;
    DOCUMENT_PREPARED.call_once(|| {
        applied = true;
        let Some(root) = document.document_element() else {
            log::warn!("Document has no root element; lang/dir not set");
            return;
        };
        let direction = theme().direction.as_str();
        for (name, value) in [("lang", LOCALE), ("dir", direction)] {
            if let Err(e) = root.set_attribute(name, value) {
                log::warn!("Failed to set <html {name}>: {e:?}");
            }
        }
        log::info!("Document prepared: lang={LOCALE} dir={direction}");
    });
    if !applied {
        log::debug!("Document already prepared");
    }
    applied
}

/// Mount the landing page into the element with id `root_id`.
pub fn mount(root_id: &str) -> Result<AppHandle<AppRoot>, MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    mount_in(&document, root_id)
}

/// Like [`mount`], against an explicit document.
pub fn mount_in(document: &Document, root_id: &str) -> Result<AppHandle<AppRoot>, MountError> {
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| MountError::MissingRoot {
            id: root_id.to_string(),
        })?;

    log::info!("Mounting landing page into #{root_id}");
    styles::install_global_styles(document)?;

    let handle =
        yew::Renderer::<AppRoot>::with_root_and_props(root, AppRootProps { theme: theme() })
            .render();

    prepare_document(document);
    Ok(handle)
}

/// Mount into the default [`ROOT_ELEMENT_ID`] container.
pub fn start() -> Result<AppHandle<AppRoot>, MountError> {
    mount(ROOT_ELEMENT_ID)
}
