use std::fmt::Display;

use wasm_bindgen::{intern, JsError};

pub(crate) fn no_valid_pda_err() -> JsError {
    JsError::new(intern("no valid PDA found"))
}

pub(crate) fn unknown_role_err(role: u8) -> JsError {
    JsError::new(&format!("unknown account role {role}"))
}

pub(crate) fn generic_err(e: impl Display) -> JsError {
    JsError::new(&format!("{e}"))
}
