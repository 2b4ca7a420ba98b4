use tracing::{debug, trace, warn};

use crate::{
    classify::{is_option, OptionPair},
    reader::ArgReader,
    tree::{Lookup, NodeId, OptId, Tree},
    Error, Mode, Result, UnknownMode,
};

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// The last argument is being completed by the shell.
    pub completion: bool,
    pub mode: Mode,
    /// Accept `/opt` and `/opt:arg` on top of the dash forms.
    pub windows: bool,
    pub unknown: UnknownMode,
}

impl Settings {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_unknown(mut self, unknown: UnknownMode) -> Self {
        self.unknown = unknown;
        self
    }

    pub fn with_completion(mut self, completion: bool) -> Self {
        self.completion = completion;
        self
    }

    fn is_lone_dash(&self, arg: &str) -> bool {
        arg == "-" || (self.windows && arg == "/")
    }

    /// Whether `arg` can be consumed as the argument of an option.
    fn is_value(&self, arg: &str) -> bool {
        self.is_lone_dash(arg) || (arg != "--" && is_option(arg, self.mode, self.windows).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Deepest command reached, the root if no command was given.
    pub node: NodeId,
    pub completions: Vec<String>,
    /// Argument being completed, only set in completion mode.
    pub partial: Option<String>,
}

/// Walks `args` down `tree`, updating the options that were called and the
/// text of the nodes along the way.
///
/// On error the tree keeps whatever was recorded before the failing argument.
pub fn parse_cli_args<I, S>(tree: &mut Tree, args: I, settings: &Settings) -> Result<Parsed>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut r = ArgReader::new(args.into_iter().map(Into::into).collect());
    let mut node = tree.root();
    let mut partial = None;

    while r.advance() {
        let arg = r.current().to_string();
        trace!("arg {:?} at `{}`", arg, tree.node(node).name());

        // Errors caused only by the argument being completed are not reported.
        let completing = settings.completion && r.is_last();
        if completing {
            partial = Some(arg.clone());
        }

        if arg == "--" {
            debug!("terminator found, remaining args are text of `{}`", tree.node(node).name());
            while r.advance() {
                tree.push_text(node, r.current());
            }
            break;
        }

        if settings.is_lone_dash(&arg) {
            match tree.lookup(node, &arg) {
                Lookup::Unique(id) => tree.option_mut(id).mark_called(&arg),
                Lookup::NoMatch => {
                    tree.add_unknown(node, &arg, &[]);
                }
                Lookup::Ambiguous(_) if completing => debug!("completing ambiguous {:?}", arg),
                Lookup::Ambiguous(ids) => return Err(ambiguous(tree, &arg, &ids)),
            }
            continue;
        }

        if let Some(pairs) = is_option(&arg, settings.mode, settings.windows) {
            let total = pairs.len();
            let mut passed = Vec::new();
            for pair in pairs {
                match tree.lookup(node, &pair.option) {
                    Lookup::Unique(id) => save(tree, node, id, &pair, &mut r, settings)?,
                    Lookup::NoMatch => match settings.unknown {
                        UnknownMode::Fail if completing => {
                            debug!("completing unknown option `{}`", pair.option);
                            tree.add_unknown(node, &pair.option, &pair.args);
                        }
                        UnknownMode::Fail => {
                            tree.add_unknown(node, &pair.option, &pair.args);
                            return Err(Error::UnknownOption { token: pair.option });
                        }
                        UnknownMode::Warn => {
                            warn!("unknown option `{}`", pair.option);
                            tree.add_unknown(node, &pair.option, &pair.args);
                        }
                        UnknownMode::Pass => passed.push(pair),
                    },
                    Lookup::Ambiguous(_) if completing => {
                        debug!("completing ambiguous option `{}`", pair.option)
                    }
                    Lookup::Ambiguous(ids) => return Err(ambiguous(tree, &pair.option, &ids)),
                }
            }
            if !passed.is_empty() {
                let text = if passed.len() == total { arg } else { unbundle(&passed) };
                debug!("passing {:?} through as text", text);
                tree.push_text(node, &text);
            }
            continue;
        }

        if let Some(cmd) = tree.command(node, &arg) {
            debug!("entering command `{}`", arg);
            node = cmd;
            continue;
        }

        tree.push_text(node, &arg);
    }

    Ok(Parsed { node, completions: Vec::new(), partial })
}

/// Marks `id` as called and stores its arguments, pulling the ones the
/// option still needs from the following args.
fn save(
    tree: &mut Tree,
    node: NodeId,
    id: OptId,
    pair: &OptionPair,
    r: &mut ArgReader,
    settings: &Settings,
) -> Result<()> {
    let opt = tree.option_mut(id);
    opt.mark_called(&pair.option);
    let (min, max) = (opt.min_args, opt.max_args);
    trace!("option `{}` called as `{}`", opt.name, pair.option);

    let mut args = pair.args.clone();
    while args.len() < max {
        let next = match r.peek() {
            Some(next) if settings.is_value(next) && tree.command(node, next).is_none() => next,
            _ => break,
        };
        args.push(next.to_string());
        r.advance();
    }
    if args.len() < min {
        if settings.completion && r.is_empty() {
            trace!("option `{}` being completed", pair.option);
            return Ok(());
        }
        let option = tree.option(id).name.clone();
        return Err(Error::MissingArgument { option, expected: min, got: args.len() });
    }
    tree.option_mut(id).save(&args)
}

/// Bundled letters of one argument that matched nothing, as a single
/// argument again: `-vxy=1` with only `v` declared becomes `-xy=1`.
fn unbundle(pairs: &[OptionPair]) -> String {
    let mut res = String::from("-");
    for pair in pairs {
        res.push_str(&pair.option);
    }
    if let Some(arg) = pairs.last().and_then(|it| it.args.first()) {
        res.push('=');
        res.push_str(arg);
    }
    res
}

fn ambiguous(tree: &Tree, token: &str, ids: &[OptId]) -> Error {
    let candidates = ids.iter().map(|&id| tree.option(id).name.clone()).collect();
    Error::AmbiguousOption { token: token.to_string(), candidates }
}
