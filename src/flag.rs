//! Flag definition and parsing
//!
//! Every command carries its own independent flag set. Flags use
//! single-dash syntax (`-name`, `-name=value`); parsing stops at the first
//! token that is not a flag, and that token plus everything after it is
//! kept as positional arguments.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Result type alias for flag parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors produced while parsing a token sequence against a flag set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("flag provided but not defined: -{0}")]
    Undefined(String),

    #[error("flag needs an argument: -{0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for flag -{name}: {reason}")]
    BadValue {
        name: String,
        value: String,
        reason: String,
    },

    /// `-h` or `-help` was given without being defined as a flag.
    #[error("help requested")]
    Help,
}

/// A typed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Whether the value equals its type's zero value.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
        }
    }

    /// Placeholder printed after the flag name in help output. Boolean
    /// flags take no value and get no placeholder.
    pub(crate) fn type_hint(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bool(_) => "",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }

    /// Whether the flag consumes a following value token.
    fn takes_value(&self) -> bool {
        !matches!(self, Value::Bool(_))
    }

    /// Replace the current value with `input` parsed as this value's type.
    fn set(&mut self, input: &str) -> std::result::Result<(), String> {
        match self {
            Value::String(s) => {
                *s = input.to_string();
                Ok(())
            }
            Value::Bool(b) => {
                *b = input
                    .parse()
                    .map_err(|_| "expected true or false".to_string())?;
                Ok(())
            }
            Value::Int(n) => {
                *n = input
                    .parse()
                    .map_err(|_| "expected an integer".to_string())?;
                Ok(())
            }
            Value::Float(x) => {
                *x = input.parse().map_err(|_| "expected a number".to_string())?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

/// One defined flag: name, help text, declared default, and current value.
#[derive(Debug, Clone)]
pub struct Flag {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) default: Value,
    pub(crate) value: Value,
}

/// A named set of flags plus the positional arguments left over from the
/// most recent parse.
#[derive(Debug, Clone)]
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    args: Vec<String>,
}

impl FlagSet {
    /// Create an empty flag set, conventionally named after its command.
    pub fn new(name: impl Into<String>) -> Self {
        FlagSet {
            name: name.into(),
            flags: BTreeMap::new(),
            args: Vec::new(),
        }
    }

    /// Define a string flag.
    pub fn string(self, name: &str, default: &str, usage: &str) -> Self {
        self.define(name, Value::String(default.to_string()), usage)
    }

    /// Define a boolean flag. Boolean flags take no value token; `-name`
    /// sets them to true and `-name=false` clears them.
    pub fn bool(self, name: &str, default: bool, usage: &str) -> Self {
        self.define(name, Value::Bool(default), usage)
    }

    /// Define an integer flag.
    pub fn int(self, name: &str, default: i64, usage: &str) -> Self {
        self.define(name, Value::Int(default), usage)
    }

    /// Define a float flag.
    pub fn float(self, name: &str, default: f64, usage: &str) -> Self {
        self.define(name, Value::Float(default), usage)
    }

    fn define(mut self, name: &str, default: Value, usage: &str) -> Self {
        if self.flags.contains_key(name) {
            panic!("flag redefined in set {:?}: -{}", self.name, name);
        }
        self.flags.insert(
            name.to_string(),
            Flag {
                name: name.to_string(),
                usage: usage.to_string(),
                value: default.clone(),
                default,
            },
        );
        self
    }

    /// Name of this flag set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments left over from the most recent parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Defined flags, in name order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Parse `args` against the defined flags.
    ///
    /// Recognized flags update their current values. The first token that
    /// is not a flag stops parsing; it and every later token are retained
    /// as positional arguments, readable through [`FlagSet::args`]. A bare
    /// `--` also stops parsing and is itself consumed.
    pub fn parse(&mut self, args: &[String]) -> ParseResult<()> {
        self.args.clear();
        let mut i = 0;
        while i < args.len() {
            let token = &args[i];
            if !token.starts_with('-') || token == "-" {
                break;
            }
            let mut body = &token[1..];
            if let Some(rest) = body.strip_prefix('-') {
                if rest.is_empty() {
                    i += 1;
                    break;
                }
                body = rest;
            }
            if body.starts_with('-') || body.starts_with('=') {
                return Err(ParseError::BadSyntax(token.clone()));
            }
            i += 1;
            let (name, inline) = match body.split_once('=') {
                Some((n, v)) => (n, Some(v.to_string())),
                None => (body, None),
            };
            let Some(flag) = self.flags.get_mut(name) else {
                if name == "help" || name == "h" {
                    return Err(ParseError::Help);
                }
                return Err(ParseError::Undefined(name.to_string()));
            };
            let value = match inline {
                Some(v) => v,
                None if flag.value.takes_value() => {
                    let Some(v) = args.get(i) else {
                        return Err(ParseError::MissingValue(name.to_string()));
                    };
                    i += 1;
                    v.clone()
                }
                None => "true".to_string(),
            };
            flag.value.set(&value).map_err(|reason| ParseError::BadValue {
                name: name.to_string(),
                value: value.clone(),
                reason,
            })?;
        }
        self.args.extend_from_slice(&args[i..]);
        Ok(())
    }

    /// Current string form of the flag `name`.
    ///
    /// Panics if the flag is not defined in this set.
    pub fn get_string(&self, name: &str) -> String {
        self.lookup(name).value.to_string()
    }

    /// Current boolean value of the flag `name`; false when its string
    /// form is not a boolean.
    ///
    /// Panics if the flag is not defined in this set.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get_string(name).parse().unwrap_or(false)
    }

    /// Current integer value of the flag `name`; 0 when its string form
    /// is not an integer.
    ///
    /// Panics if the flag is not defined in this set.
    pub fn get_int(&self, name: &str) -> i64 {
        self.get_string(name).parse().unwrap_or(0)
    }

    /// Current float value of the flag `name`; 0.0 when its string form
    /// is not a number.
    ///
    /// Panics if the flag is not defined in this set.
    pub fn get_float(&self, name: &str) -> f64 {
        self.get_string(name).parse().unwrap_or(0.0)
    }

    fn lookup(&self, name: &str) -> &Flag {
        self.flags
            .get(name)
            .unwrap_or_else(|| panic!("flag not defined in set {:?}: -{}", self.name, name))
    }
}
