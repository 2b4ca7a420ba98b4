use crate::{Error, Result};

/// Kind of value an option stores, determines its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    /// Accumulates every argument of every occurrence.
    StringRepeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(it) => Some(it.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(it) => Some(it),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(it) => Some(it),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(it) => Some(it.as_slice()),
            _ => None,
        }
    }
}

/// A named value sink reachable through any of its aliases.
///
/// The same `OptionData` may be reachable from several nodes of a
/// [`Tree`](crate::Tree); it is stored once and referred to by
/// [`OptId`](crate::OptId).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionData {
    pub name: String,
    pub aliases: Vec<String>,
    pub kind: ValueKind,
    pub description: String,
    /// Set when the option was synthesized for a token that matched nothing.
    pub unknown: bool,
    pub called: bool,
    /// Alias as it appeared on the command line, empty until called.
    pub used_alias: String,
    pub min_args: usize,
    pub max_args: usize,
    default: Value,
    value: Value,
}

impl OptionData {
    pub fn new(name: &str, kind: ValueKind, default: Value) -> OptionData {
        let (min_args, max_args) = match kind {
            ValueKind::Bool => (0, 0),
            ValueKind::String | ValueKind::Int | ValueKind::StringRepeat => (1, 1),
        };
        OptionData {
            name: name.to_string(),
            aliases: vec![name.to_string()],
            kind,
            description: String::new(),
            unknown: false,
            called: false,
            used_alias: String::new(),
            min_args,
            max_args,
            value: default.clone(),
            default,
        }
    }

    /// Placeholder for an option token that matched no declared alias.
    pub fn unknown(name: &str, args: &[String]) -> OptionData {
        let mut res = OptionData::new(name, ValueKind::StringRepeat, Value::List(args.to_vec()));
        res.unknown = true;
        res.min_args = 0;
        res.max_args = 0;
        res.mark_called(name);
        res
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|it| it == alias)
    }

    pub fn mark_called(&mut self, alias: &str) {
        self.called = true;
        self.used_alias = alias.to_string();
    }

    /// Stores the arguments of one occurrence of the option.
    pub fn save(&mut self, args: &[String]) -> Result<()> {
        if self.kind != ValueKind::Bool && !self.unknown && args.len() > self.max_args {
            let reason = format!("takes at most {} argument(s)", self.max_args);
            return Err(self.invalid(&args.join(" "), reason));
        }
        match self.kind {
            ValueKind::String => {
                if let Some(arg) = args.last() {
                    self.value = Value::Str(arg.clone());
                }
            }
            ValueKind::Int => {
                if let Some(arg) = args.last() {
                    let int = arg.parse::<i64>().map_err(|err| self.invalid(arg, err.to_string()))?;
                    self.value = Value::Int(int);
                }
            }
            ValueKind::Bool => {
                let flag = match args {
                    [] => !self.default.as_bool().unwrap_or(false),
                    [arg] => match arg.as_str() {
                        "true" => true,
                        "false" => false,
                        _ => {
                            return Err(self.invalid(arg, "expected `true` or `false`".to_string()))
                        }
                    },
                    _ => {
                        let reason = "takes at most 1 argument".to_string();
                        return Err(self.invalid(&args.join(" "), reason));
                    }
                };
                self.value = Value::Bool(flag);
            }
            ValueKind::StringRepeat => match &mut self.value {
                Value::List(list) => list.extend(args.iter().cloned()),
                value => *value = Value::List(args.to_vec()),
            },
        }
        Ok(())
    }

    fn invalid(&self, value: &str, reason: String) -> Error {
        Error::InvalidValue { option: self.name.clone(), value: value.to_string(), reason }
    }
}
