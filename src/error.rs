//! Errors raised while attaching the game to the page

use std::fmt;

/// Failures while wiring the game into the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebError {
    NoWindow,
    NoDocument,
    MissingElement { id: &'static str },
    WrongElementType { id: &'static str, expected: &'static str },
    NoCanvasContext,
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingElement { id } => write!(f, "element #{id} not found"),
            Self::WrongElementType { id, expected } => {
                write!(f, "element #{id} is not a {expected}")
            }
            Self::NoCanvasContext => write!(f, "canvas has no 2d context"),
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        let err = WebError::MissingElement { id: "gameCanvas" };
        assert_eq!(err.to_string(), "element #gameCanvas not found");

        let err = WebError::WrongElementType {
            id: "gameCanvas",
            expected: "canvas",
        };
        assert_eq!(err.to_string(), "element #gameCanvas is not a canvas");
    }
}
