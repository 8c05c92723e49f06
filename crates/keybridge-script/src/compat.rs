//! Version-aware registration of native functions into a module table.
//!
//! [`set_funcs`] registers a list of named functions, giving each one its own
//! copy of a shared list of upvalues.  Newer scripting API levels have this
//! natively; 5.1 does not, so the same contract is provided here for every
//! level, with one difference: an entry without a function becomes a `false`
//! placeholder on 5.4 and later, and is rejected before that.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::domain::ScriptValue;
use crate::error::ScriptError;

/// Most upvalues a single function can capture.
pub const MAX_UPVALUES: usize = 255;

/// Scripting API level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ApiVersion {
    V5_1,
    V5_2,
    V5_3,
    #[default]
    V5_4,
}

impl ApiVersion {
    /// Version number in the `major * 100 + minor` form (`501` for 5.1).
    pub const fn number(self) -> u32 {
        match self {
            ApiVersion::V5_1 => 501,
            ApiVersion::V5_2 => 502,
            ApiVersion::V5_3 => 503,
            ApiVersion::V5_4 => 504,
        }
    }

    /// Whether entries without a function are registered as placeholders.
    pub const fn supports_placeholders(self) -> bool {
        self.number() >= 504
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.number();
        write!(f, "{}.{}", n / 100, n % 100)
    }
}

impl FromStr for ApiVersion {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5.1" | "501" => Ok(ApiVersion::V5_1),
            "5.2" | "502" => Ok(ApiVersion::V5_2),
            "5.3" | "503" => Ok(ApiVersion::V5_3),
            "5.4" | "504" => Ok(ApiVersion::V5_4),
            other => Err(ScriptError::UnsupportedVersion(other.to_string())),
        }
    }
}

/// A native function: `(context, upvalues, args) -> results`.
pub type NativeFn<C> =
    fn(&mut C, &[ScriptValue], &[ScriptValue]) -> Result<Vec<ScriptValue>, ScriptError>;

/// One registration entry.
pub struct FunctionReg<C> {
    pub name: &'static str,
    pub func: Option<NativeFn<C>>,
}

impl<C> FunctionReg<C> {
    pub const fn new(name: &'static str, func: NativeFn<C>) -> Self {
        Self {
            name,
            func: Some(func),
        }
    }

    pub const fn placeholder(name: &'static str) -> Self {
        Self { name, func: None }
    }
}

enum Field<C> {
    Function {
        func: NativeFn<C>,
        upvalues: Vec<ScriptValue>,
    },
    Placeholder,
}

/// A named table of registered functions.
pub struct ModuleTable<C> {
    name: String,
    fields: BTreeMap<&'static str, Field<C>>,
}

impl<C> ModuleTable<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `name` is registered, as a function or a placeholder.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns `true` if `name` is registered as a function.
    pub fn is_callable(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Field::Function { .. }))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Upvalues captured by the function `name`.
    pub fn upvalues(&self, name: &str) -> Option<&[ScriptValue]> {
        match self.fields.get(name) {
            Some(Field::Function { upvalues, .. }) => Some(upvalues),
            _ => None,
        }
    }

    /// Calls the function `name` with `args`.
    ///
    /// # Errors
    ///
    /// [`ScriptError::UnknownFunction`] if nothing is registered under `name`,
    /// [`ScriptError::NotCallable`] for a placeholder, or whatever the
    /// function itself returns.
    pub fn call(
        &self,
        ctx: &mut C,
        name: &str,
        args: &[ScriptValue],
    ) -> Result<Vec<ScriptValue>, ScriptError> {
        match self.fields.get(name) {
            Some(Field::Function { func, upvalues }) => {
                trace!(module = %self.name, function = name, nargs = args.len(), "call");
                func(ctx, upvalues, args)
            }
            Some(Field::Placeholder) => Err(ScriptError::NotCallable(name.to_string())),
            None => Err(ScriptError::UnknownFunction {
                module: self.name.clone(),
                name: name.to_string(),
            }),
        }
    }
}

impl<C> fmt::Debug for ModuleTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleTable")
            .field("name", &self.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registers `regs` into `table`, each function capturing its own copy of
/// `upvalues`.  Existing fields with the same name are replaced.
///
/// Nothing is registered when an error is returned.
///
/// # Errors
///
/// [`ScriptError::TooManyUpvalues`] if more than [`MAX_UPVALUES`] are given,
/// and [`ScriptError::MissingFunction`] for an entry without a function when
/// `version` does not support placeholders.
pub fn set_funcs<C>(
    version: ApiVersion,
    table: &mut ModuleTable<C>,
    regs: &[FunctionReg<C>],
    upvalues: &[ScriptValue],
) -> Result<(), ScriptError> {
    if upvalues.len() > MAX_UPVALUES {
        return Err(ScriptError::TooManyUpvalues(upvalues.len()));
    }
    if !version.supports_placeholders() {
        if let Some(reg) = regs.iter().find(|r| r.func.is_none()) {
            return Err(ScriptError::MissingFunction(reg.name.to_string()));
        }
    }

    for reg in regs {
        let field = match reg.func {
            Some(func) => Field::Function {
                func,
                upvalues: upvalues.to_vec(),
            },
            None => Field::Placeholder,
        };
        table.fields.insert(reg.name, field);
    }

    debug!(
        module = %table.name,
        %version,
        count = regs.len(),
        nup = upvalues.len(),
        "registered functions"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test context: counts calls.
    #[derive(Default)]
    struct Counter {
        calls: usize,
    }

    type CallResult = Result<Vec<ScriptValue>, ScriptError>;

    fn bump(ctx: &mut Counter, _up: &[ScriptValue], _args: &[ScriptValue]) -> CallResult {
        ctx.calls += 1;
        Ok(vec![ScriptValue::Number(ctx.calls as f64)])
    }

    fn echo_upvalues(_ctx: &mut Counter, up: &[ScriptValue], _args: &[ScriptValue]) -> CallResult {
        Ok(up.to_vec())
    }

    fn echo_args(_ctx: &mut Counter, _up: &[ScriptValue], args: &[ScriptValue]) -> CallResult {
        Ok(args.to_vec())
    }

    const REGS: &[FunctionReg<Counter>] = &[
        FunctionReg::new("bump", bump),
        FunctionReg::new("upvalues", echo_upvalues),
        FunctionReg::new("echo", echo_args),
    ];

    #[test]
    fn test_registered_functions_are_callable() {
        // Arrange
        let mut table = ModuleTable::new("test");
        let mut ctx = Counter::default();

        // Act
        set_funcs(ApiVersion::V5_1, &mut table, REGS, &[]).expect("register");

        // Assert
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["bump", "echo", "upvalues"]);
        assert_eq!(table.call(&mut ctx, "bump", &[]), Ok(vec![ScriptValue::Number(1.0)]));
        assert_eq!(table.call(&mut ctx, "bump", &[]), Ok(vec![ScriptValue::Number(2.0)]));
        assert_eq!(
            table.call(&mut ctx, "echo", &[ScriptValue::from("x")]),
            Ok(vec![ScriptValue::from("x")])
        );
    }

    #[test]
    fn test_every_function_gets_the_shared_upvalues() {
        let mut table = ModuleTable::new("test");
        let up = [ScriptValue::from("shared"), ScriptValue::Number(7.0)];

        set_funcs(ApiVersion::V5_2, &mut table, REGS, &up).expect("register");

        for name in ["bump", "upvalues", "echo"] {
            assert_eq!(table.upvalues(name), Some(&up[..]), "{name}");
        }
        let mut ctx = Counter::default();
        assert_eq!(table.call(&mut ctx, "upvalues", &[]), Ok(up.to_vec()));
    }

    #[test]
    fn test_upvalue_limit() {
        let mut table = ModuleTable::new("test");
        let at_limit = vec![ScriptValue::Nil; MAX_UPVALUES];
        let over = vec![ScriptValue::Nil; MAX_UPVALUES + 1];

        assert!(set_funcs(ApiVersion::V5_4, &mut table, REGS, &at_limit).is_ok());
        assert_eq!(
            set_funcs(ApiVersion::V5_4, &mut ModuleTable::new("t"), REGS, &over),
            Err(ScriptError::TooManyUpvalues(256))
        );
    }

    #[test]
    fn test_placeholder_on_5_4() {
        // Arrange
        let regs = [FunctionReg::new("bump", bump), FunctionReg::placeholder("later")];
        let mut table = ModuleTable::new("test");
        let mut ctx = Counter::default();

        // Act
        set_funcs(ApiVersion::V5_4, &mut table, &regs, &[]).expect("register");

        // Assert
        assert!(table.contains("later"));
        assert!(!table.is_callable("later"));
        assert_eq!(table.upvalues("later"), None);
        assert_eq!(
            table.call(&mut ctx, "later", &[]),
            Err(ScriptError::NotCallable("later".to_string()))
        );
    }

    #[test]
    fn test_missing_function_before_5_4_registers_nothing() {
        let regs = [FunctionReg::new("bump", bump), FunctionReg::placeholder("later")];

        for version in [ApiVersion::V5_1, ApiVersion::V5_2, ApiVersion::V5_3] {
            let mut table = ModuleTable::new("test");
            let result = set_funcs(version, &mut table, &regs, &[]);

            assert_eq!(result, Err(ScriptError::MissingFunction("later".to_string())));
            assert_eq!(table.names().count(), 0, "{version}");
        }
    }

    #[test]
    fn test_unknown_function() {
        let table: ModuleTable<Counter> = ModuleTable::new("test");
        let err = table.call(&mut Counter::default(), "nope", &[]).unwrap_err();
        assert_eq!(err.to_string(), "attempt to call unknown function 'test.nope'");
    }

    #[test]
    fn test_reregistration_replaces_fields() {
        let mut table = ModuleTable::new("test");
        set_funcs(ApiVersion::V5_4, &mut table, &[FunctionReg::placeholder("bump")], &[])
            .expect("placeholder");
        set_funcs(ApiVersion::V5_4, &mut table, &[FunctionReg::new("bump", bump)], &[])
            .expect("function");

        assert!(table.is_callable("bump"));
    }

    #[test]
    fn test_version_parsing_and_display() {
        assert_eq!("5.1".parse::<ApiVersion>(), Ok(ApiVersion::V5_1));
        assert_eq!("504".parse::<ApiVersion>(), Ok(ApiVersion::V5_4));
        assert!("5.5".parse::<ApiVersion>().is_err());
        assert_eq!(ApiVersion::V5_3.to_string(), "5.3");
        assert!(ApiVersion::V5_1 < ApiVersion::V5_4);
        assert!(!ApiVersion::V5_3.supports_placeholders());
        assert!(ApiVersion::V5_4.supports_placeholders());
    }
}
