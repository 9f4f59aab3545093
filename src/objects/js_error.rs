use std::{error::Error, fmt::Display};
use wasm_bindgen::JsCast;

/// Failure reported by a browser API.
#[derive(Debug, Clone, PartialEq)]
pub struct JsError {
    pub description: String,
}

impl Error for JsError {}

impl Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.description))
    }
}

impl From<wasm_bindgen::JsValue> for JsError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        let description = match val.as_string() {
            Some(description) => description,
            None => match val.dyn_ref::<js_sys::Error>() {
                Some(err) => String::from(err.message()),
                None => format!("{:?}", val),
            },
        };

        Self { description }
    }
}

impl From<&str> for JsError {
    fn from(str: &str) -> Self {
        Self {
            description: String::from(str),
        }
    }
}
