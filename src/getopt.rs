use crate::{
    option::{OptionData, Value, ValueKind},
    parse::{parse_cli_args, Parsed, Settings},
    tree::{CommandFn, NodeId, OptId, Tree},
    Error, Result,
};

/// Declares a program's options and commands, then parses its arguments.
///
/// Options are declared on a node and are inherited by the commands
/// declared on that node afterwards.
#[derive(Debug, Clone)]
pub struct GetOpt {
    tree: Tree,
    settings: Settings,
}

impl GetOpt {
    pub fn new(program: &str) -> GetOpt {
        GetOpt { tree: Tree::new(program), settings: Settings::default() }
    }

    pub fn with_settings(mut self, settings: Settings) -> GetOpt {
        self.settings = settings;
        self
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn command(&mut self, parent: NodeId, name: &str, description: &str) -> NodeId {
        self.tree.add_command(parent, name, description)
    }

    pub fn set_handler(&mut self, node: NodeId, handler: CommandFn) {
        self.tree.set_handler(node, handler)
    }

    pub fn string(&mut self, node: NodeId, name: &str, default: &str) -> OptionDef<'_> {
        self.define(node, OptionData::new(name, ValueKind::String, Value::Str(default.to_string())))
    }

    /// A flag, calling it stores the opposite of `default`.
    ///
    /// A `-` alias only marks the option called and leaves its value alone,
    /// check [`GetOpt::called`] for it.
    pub fn bool(&mut self, node: NodeId, name: &str, default: bool) -> OptionDef<'_> {
        self.define(node, OptionData::new(name, ValueKind::Bool, Value::Bool(default)))
    }

    pub fn int(&mut self, node: NodeId, name: &str, default: i64) -> OptionDef<'_> {
        self.define(node, OptionData::new(name, ValueKind::Int, Value::Int(default)))
    }

    /// Collects the arguments of every occurrence, one per occurrence
    /// unless [`OptionDef::args`] says otherwise.
    pub fn string_slice(&mut self, node: NodeId, name: &str) -> OptionDef<'_> {
        self.define(node, OptionData::new(name, ValueKind::StringRepeat, Value::List(Vec::new())))
    }

    fn define(&mut self, node: NodeId, opt: OptionData) -> OptionDef<'_> {
        let id = self.tree.add_option(node, opt);
        OptionDef { tree: &mut self.tree, node, id }
    }

    pub fn value(&self, id: OptId) -> &Value {
        self.tree.option(id).value()
    }

    pub fn called(&self, id: OptId) -> bool {
        self.tree.option(id).called
    }

    pub fn parse<I, S>(&mut self, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        parse_cli_args(&mut self.tree, args, &self.settings)
    }

    /// Parses `args` and hands the selected command its text.
    pub fn run<I, S>(&mut self, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parsed = self.parse(args)?;
        let node = self.tree.node(parsed.node);
        if let Some(handler) = node.handler() {
            handler(&self.tree, parsed.node, node.text()).map_err(|err| Error::Command {
                command: node.name().to_string(),
                message: err.to_string(),
            })?;
        }
        Ok(parsed)
    }
}

/// Builder returned when declaring an option.
#[derive(Debug)]
pub struct OptionDef<'a> {
    tree: &'a mut Tree,
    node: NodeId,
    id: OptId,
}

impl OptionDef<'_> {
    /// Adds `alias` on the node the option was declared on. A lone `-`
    /// alias is only ever marked called, it never receives a value.
    pub fn alias(self, alias: &str) -> Self {
        self.tree.add_alias(self.node, self.id, alias);
        self
    }

    pub fn description(self, description: &str) -> Self {
        self.tree.option_mut(self.id).description = description.to_string();
        self
    }

    /// Arguments taken per occurrence, meant for repeatable options.
    pub fn args(self, min: usize, max: usize) -> Self {
        let opt = self.tree.option_mut(self.id);
        opt.min_args = min;
        opt.max_args = max.max(min);
        self
    }

    pub fn id(&self) -> OptId {
        self.id
    }
}
