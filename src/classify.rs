use crate::Mode;

/// An option name as it appeared in one argument, without its prefix, plus
/// any arguments attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPair {
    pub option: String,
    pub args: Vec<String>,
}

impl OptionPair {
    fn new(option: &str, args: Vec<String>) -> OptionPair {
        OptionPair { option: option.to_string(), args }
    }
}

/// Splits `arg` into the options it stands for.
///
/// Returns `None` when `arg` is not an option at all, which includes the
/// `--` terminator. `windows` enables the `/opt` prefix and the `:`
/// separator in addition to the `-`/`--` forms.
pub fn is_option(arg: &str, mode: Mode, windows: bool) -> Option<Vec<OptionPair>> {
    if arg == "-" || (windows && arg == "/") {
        return Some(vec![OptionPair::new(arg, Vec::new())]);
    }
    if arg == "--" {
        return None;
    }

    let long =
        arg.strip_prefix("--").or_else(|| if windows { arg.strip_prefix('/') } else { None });
    if let Some(long) = long {
        let (name, args) = split_inline(long, windows);
        return Some(vec![OptionPair::new(name, args)]);
    }

    let short = arg.strip_prefix('-')?;
    let res = match mode {
        Mode::Normal => {
            let (name, args) = split_inline(short, false);
            vec![OptionPair::new(name, args)]
        }
        Mode::Bundling => {
            let (names, args) = split_inline(short, false);
            let mut res: Vec<OptionPair> = names
                .chars()
                .map(|c| OptionPair { option: c.to_string(), args: Vec::new() })
                .collect();
            if let Some(last) = res.last_mut() {
                last.args = args;
            }
            res
        }
        Mode::SingleDash => {
            let mut chars = short.chars();
            let name = chars.next().map(String::from).unwrap_or_default();
            let rest = chars.as_str();
            let args = if rest.is_empty() { Vec::new() } else { vec![rest.to_string()] };
            vec![OptionPair { option: name, args }]
        }
    };
    Some(res)
}

fn split_inline(s: &str, windows: bool) -> (&str, Vec<String>) {
    let sep = if windows { s.find(&['=', ':'][..]) } else { s.find('=') };
    match sep {
        Some(idx) => (&s[..idx], vec![s[idx + 1..].to_string()]),
        None => (s, Vec::new()),
    }
}
