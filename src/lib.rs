//! Command line arguments parser that builds a tree out of the invocation.
//!
//! A program is declared as a tree: the root node holds global options,
//! commands hang off it (and off each other) with their own options, and
//! every node collects the positional text found while it was the current
//! node. [`parse_cli_args`] walks that tree in a single pass over the
//! arguments and returns the node of the command that ended up selected.
//!
//! ```
//! use argtree::GetOpt;
//!
//! let mut opt = GetOpt::new("prog");
//! let root = opt.root();
//! let verbose = opt.bool(root, "verbose", false).alias("v").id();
//! let build = opt.command(root, "build", "build the project");
//! let target = opt.string(build, "target", "debug").id();
//!
//! let parsed = opt.parse(["-v", "build", "--target=release", "src"]).unwrap();
//! assert_eq!(parsed.node, build);
//! assert!(opt.called(verbose));
//! assert_eq!(opt.value(target).as_str(), Some("release"));
//! assert_eq!(opt.tree().node(build).text(), ["src"]);
//! ```

mod classify;
mod getopt;
mod option;
mod parse;
mod reader;
mod tree;

pub use crate::{
    classify::{is_option, OptionPair},
    getopt::{GetOpt, OptionDef},
    option::{OptionData, Value, ValueKind},
    parse::{parse_cli_args, Parsed, Settings},
    reader::ArgReader,
    tree::{CommandFn, HandlerError, Lookup, Node, NodeId, NodeKind, OptId, Tree},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Interpretation of tokens starting with a single `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `-opt` is the option `opt`.
    #[default]
    Normal,
    /// `-opt` is the three options `o`, `p` and `t`.
    Bundling,
    /// `-opt` is the option `o` with the argument `pt`.
    SingleDash,
}

/// What to do with an option token that matches no declared alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownMode {
    Fail,
    #[default]
    Warn,
    Pass,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("missing argument for option `{option}`: expected {expected}, got {got}")]
    MissingArgument { option: String, expected: usize, got: usize },
    #[error("ambiguous option `{token}`, matches: {}", candidates.join(", "))]
    AmbiguousOption { token: String, candidates: Vec<String> },
    #[error("unknown option `{token}`")]
    UnknownOption { token: String },
    #[error("command not found: `{}`", path.join(" "))]
    NodeNotFound { path: Vec<String> },
    #[error("can't parse `{option}` value {value:?}, {reason}")]
    InvalidValue { option: String, value: String, reason: String },
    #[error("command `{command}` failed: {message}")]
    Command { command: String, message: String },
}
