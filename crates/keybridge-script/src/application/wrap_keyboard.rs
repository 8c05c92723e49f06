//! Script bindings for the keyboard module.
//!
//! | Function             | Arguments                         | Returns  |
//! |----------------------|-----------------------------------|----------|
//! | `isDown`             | key names, or a table of them     | boolean  |
//! | `isScancodeDown`     | scancode names, or a table        | boolean  |
//! | `getKeyFromScancode` | scancode name                     | key name |
//! | `getScancodeFromKey` | key name                          | scancode name |
//! | `setTextInput`       | enable [, x, y, w, h]             |          |
//! | `hasTextInput`       |                                   | boolean  |
//! | `hasScreenKeyboard`  |                                   | boolean  |
//! | `setKeyRepeat`       | enable                            |          |
//! | `hasKeyRepeat`       |                                   | boolean  |

use keybridge_core::{Key, Scancode, TextInputRegion};
use keybridge_host::application::keyboard::Keyboard;

use super::args::{check_bool, check_names, check_number, check_str};
use crate::compat::{set_funcs, ApiVersion, FunctionReg, ModuleTable};
use crate::domain::ScriptValue;
use crate::error::ScriptError;

/// Name the module is registered under.
pub const MODULE_NAME: &str = "keyboard";

type CallResult = Result<Vec<ScriptValue>, ScriptError>;

/// Registration list, in the order scripts expect to find them.
pub const FUNCTIONS: &[FunctionReg<Keyboard>] = &[
    FunctionReg::new("isDown", w_is_down),
    FunctionReg::new("isScancodeDown", w_is_scancode_down),
    FunctionReg::new("getKeyFromScancode", w_get_key_from_scancode),
    FunctionReg::new("getScancodeFromKey", w_get_scancode_from_key),
    FunctionReg::new("setTextInput", w_set_text_input),
    FunctionReg::new("hasTextInput", w_has_text_input),
    FunctionReg::new("hasScreenKeyboard", w_has_screen_keyboard),
    FunctionReg::new("setKeyRepeat", w_set_key_repeat),
    FunctionReg::new("hasKeyRepeat", w_has_key_repeat),
];

/// Builds the `keyboard` module table for `version`.
///
/// # Errors
///
/// Propagates [`set_funcs`] failures.
pub fn register(version: ApiVersion) -> Result<ModuleTable<Keyboard>, ScriptError> {
    let mut table = ModuleTable::new(MODULE_NAME);
    set_funcs(version, &mut table, FUNCTIONS, &[])?;
    Ok(table)
}

fn w_is_down(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    let keys = check_names(args)?
        .into_iter()
        .map(str::parse::<Key>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(vec![kb.is_down(&keys).into()])
}

fn w_is_scancode_down(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    let scancodes = check_names(args)?
        .into_iter()
        .map(str::parse::<Scancode>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(vec![kb.is_scancode_down(&scancodes).into()])
}

fn w_get_key_from_scancode(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    let scancode: Scancode = check_str(args, 1)?.parse()?;
    Ok(vec![kb.key_from_scancode(scancode).name().into()])
}

fn w_get_scancode_from_key(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    let key: Key = check_str(args, 1)?.parse()?;
    Ok(vec![kb.scancode_from_key(key).name().into()])
}

fn w_set_text_input(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    let enable = check_bool(args, 1)?;
    if args.len() <= 1 {
        kb.set_text_input(enable);
    } else {
        let region = TextInputRegion::new(
            check_number(args, 2)?,
            check_number(args, 3)?,
            check_number(args, 4)?,
            check_number(args, 5)?,
        );
        kb.set_text_input_region(enable, region);
    }
    Ok(vec![])
}

fn w_has_text_input(kb: &mut Keyboard, _up: &[ScriptValue], _args: &[ScriptValue]) -> CallResult {
    Ok(vec![kb.has_text_input().into()])
}

fn w_has_screen_keyboard(kb: &mut Keyboard, _up: &[ScriptValue], _args: &[ScriptValue]) -> CallResult {
    Ok(vec![kb.has_screen_keyboard().into()])
}

fn w_set_key_repeat(kb: &mut Keyboard, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
    kb.set_key_repeat(check_bool(args, 1)?);
    Ok(vec![])
}

fn w_has_key_repeat(kb: &mut Keyboard, _up: &[ScriptValue], _args: &[ScriptValue]) -> CallResult {
    Ok(vec![kb.has_key_repeat().into()])
}
