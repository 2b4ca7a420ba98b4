/// Forward-only cursor over the arguments.
///
/// `advance` moves onto the next argument, `current` is the argument the
/// cursor is on. Arguments are kept reversed so that consuming one is a pop.
#[derive(Debug)]
pub struct ArgReader {
    rargs: Vec<String>,
    current: Option<String>,
}

impl ArgReader {
    pub fn new(mut args: Vec<String>) -> Self {
        args.reverse();
        Self { rargs: args, current: None }
    }

    /// Moves to the next argument, returns `false` once they run out.
    pub fn advance(&mut self) -> bool {
        self.current = self.rargs.pop();
        self.current.is_some()
    }

    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or_default()
    }

    pub fn peek(&self) -> Option<&str> {
        self.rargs.last().map(String::as_str)
    }

    /// Whether the current argument is the final one.
    pub fn is_last(&self) -> bool {
        self.current.is_some() && self.rargs.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.rargs.is_empty()
    }
}
