//! JSON request/reply messages for the `keybridge` binary.
//!
//! One JSON object per line in each direction.  Requests carry an `"op"`
//! discriminant:
//!
//! ```json
//! {"op":"call","function":"isDown","args":["a","lshift"]}
//! {"op":"press","scancode":"a"}
//! {"op":"release","scancode":"a"}
//! {"op":"release_all"}
//! ```
//!
//! Replies are `{"ok":true,"results":[...]}` or `{"ok":false,"error":"..."}`.

use keybridge_core::Scancode;
use serde::{Deserialize, Serialize};

use super::value::ScriptValue;

/// A request read from stdin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Calls a function of the keyboard module.
    Call {
        function: String,
        #[serde(default)]
        args: Vec<ScriptValue>,
    },
    /// Holds down a physical key on the headless host.
    Press { scancode: Scancode },
    /// Lets go of a physical key on the headless host.
    Release { scancode: Scancode },
    /// Lets go of every key.
    ReleaseAll,
}

/// A reply written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ScriptValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    pub fn success(results: Vec<ScriptValue>) -> Self {
        Self {
            ok: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            results: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_request_from_json() {
        // Arrange
        let json = r#"{"op":"call","function":"isDown","args":["a",["b"]]}"#;

        // Act
        let req: Request = serde_json::from_str(json).expect("parse");

        // Assert
        assert_eq!(
            req,
            Request::Call {
                function: "isDown".to_string(),
                args: vec![
                    ScriptValue::from("a"),
                    ScriptValue::Table(vec![ScriptValue::from("b")]),
                ],
            }
        );
    }

    #[test]
    fn test_call_without_args_defaults_to_empty() {
        let req: Request = serde_json::from_str(r#"{"op":"call","function":"hasTextInput"}"#)
            .expect("parse");
        assert_eq!(
            req,
            Request::Call {
                function: "hasTextInput".to_string(),
                args: vec![],
            }
        );
    }

    #[test]
    fn test_key_state_requests_from_json() {
        let press: Request = serde_json::from_str(r#"{"op":"press","scancode":"lshift"}"#)
            .expect("parse press");
        let all: Request = serde_json::from_str(r#"{"op":"release_all"}"#).expect("parse all");

        assert_eq!(press, Request::Press { scancode: Scancode::LShift });
        assert_eq!(all, Request::ReleaseAll);
    }

    #[test]
    fn test_unknown_scancode_name_is_rejected() {
        let result: Result<Request, _> =
            serde_json::from_str(r#"{"op":"press","scancode":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reply_json_shapes() {
        let ok = serde_json::to_string(&Reply::success(vec![ScriptValue::from(true)]))
            .expect("serialize");
        let err = serde_json::to_string(&Reply::failure("boom")).expect("serialize");

        assert_eq!(ok, r#"{"ok":true,"results":[true]}"#);
        assert_eq!(err, r#"{"ok":false,"error":"boom"}"#);
    }
}
