//! Dispatches JSON requests to the keyboard module.

use keybridge_host::application::keyboard::Keyboard;
use keybridge_host::infrastructure::session::KeyboardSession;
use tracing::{debug, warn};

use super::wrap_keyboard;
use crate::compat::{ApiVersion, ModuleTable};
use crate::domain::{Reply, Request, ScriptValue};
use crate::error::ScriptError;

/// A keyboard session with its script module registered.
#[derive(Debug)]
pub struct ScriptSession {
    session: KeyboardSession,
    module: ModuleTable<Keyboard>,
}

impl ScriptSession {
    /// Registers the keyboard module for `version` over `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub fn new(session: KeyboardSession, version: ApiVersion) -> Result<Self, ScriptError> {
        let module = wrap_keyboard::register(version)?;
        Ok(Self { session, module })
    }

    pub fn session(&self) -> &KeyboardSession {
        &self.session
    }

    /// Calls `function` of the keyboard module.
    ///
    /// # Errors
    ///
    /// Returns whatever the call raises.
    pub fn call(
        &mut self,
        function: &str,
        args: &[ScriptValue],
    ) -> Result<Vec<ScriptValue>, ScriptError> {
        self.module.call(self.session.keyboard_mut(), function, args)
    }

    /// Executes one request.
    pub fn handle(&mut self, request: Request) -> Reply {
        match request {
            Request::Call { function, args } => match self.call(&function, &args) {
                Ok(results) => Reply::success(results),
                Err(e) => {
                    debug!(%function, error = %e, "call failed");
                    Reply::failure(e.to_string())
                }
            },
            Request::Press { scancode } => {
                self.session.backend().press(scancode);
                Reply::success(vec![])
            }
            Request::Release { scancode } => {
                self.session.backend().release(scancode);
                Reply::success(vec![])
            }
            Request::ReleaseAll => {
                self.session.backend().release_all();
                Reply::success(vec![])
            }
        }
    }

    /// Parses and executes one JSON request line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!(error = %e, "malformed request");
                Reply::failure(format!("malformed request: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keybridge_core::Scancode;

    fn session() -> ScriptSession {
        ScriptSession::new(KeyboardSession::default(), ApiVersion::default()).expect("session")
    }

    #[test]
    fn test_press_then_query() {
        // Arrange
        let mut s = session();

        // Act
        let pressed = s.handle(Request::Press { scancode: Scancode::W });
        let reply = s.handle(Request::Call {
            function: "isDown".to_string(),
            args: vec![ScriptValue::from("w")],
        });

        // Assert
        assert_eq!(pressed, Reply::success(vec![]));
        assert_eq!(reply, Reply::success(vec![ScriptValue::Boolean(true)]));
    }

    #[test]
    fn test_release_and_release_all() {
        let mut s = session();
        s.handle(Request::Press { scancode: Scancode::A });
        s.handle(Request::Press { scancode: Scancode::B });

        s.handle(Request::Release { scancode: Scancode::A });
        assert_eq!(s.call("isScancodeDown", &[ScriptValue::from("a")]), Ok(vec![ScriptValue::Boolean(false)]));
        assert_eq!(s.call("isScancodeDown", &[ScriptValue::from("b")]), Ok(vec![ScriptValue::Boolean(true)]));

        s.handle(Request::ReleaseAll);
        assert_eq!(s.call("isScancodeDown", &[ScriptValue::from("b")]), Ok(vec![ScriptValue::Boolean(false)]));
    }

    #[test]
    fn test_call_errors_become_failure_replies() {
        let mut s = session();

        let unknown = s.handle(Request::Call { function: "isUp".to_string(), args: vec![] });

        assert_eq!(
            unknown,
            Reply::failure("attempt to call unknown function 'keyboard.isUp'")
        );
    }

    #[test]
    fn test_handle_line() {
        let mut s = session();

        let ok = s.handle_line(r#"{"op":"call","function":"hasKeyRepeat"}"#);
        let bad = s.handle_line("{not json");

        assert_eq!(ok, Reply::success(vec![ScriptValue::Boolean(false)]));
        assert!(!bad.ok);
        assert!(bad.error.unwrap_or_default().starts_with("malformed request"));
    }
}
