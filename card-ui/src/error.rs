// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the application could not be attached to the host document.
///
/// All of them are fatal: the entry point reports the error and stops.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no browser document is available")]
    NoDocument,

    #[error("mount target #{id} was not found in the document")]
    MissingRoot { id: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl MountError {
    pub(crate) fn dom(context: &str, err: JsValue) -> Self {
        MountError::Dom(format!("{context}: {err:?}"))
    }
}
