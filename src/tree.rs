use std::{collections::BTreeMap, fmt};

use crate::{option::OptionData, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Handle to an option stored in a [`Tree`].
///
/// A command inherits the options its parent had when it was declared by
/// sharing their handles, so a value saved while parsing the command is the
/// value seen from the parent as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Command,
}

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Callback attached to a command, receives the command's node and text.
pub type CommandFn = fn(&Tree, NodeId, &[String]) -> std::result::Result<(), HandlerError>;

#[derive(Clone)]
pub struct Node {
    kind: NodeKind,
    name: String,
    description: String,
    commands: BTreeMap<String, NodeId>,
    /// Alias to the options declared or inherited under it at this node.
    options: BTreeMap<String, Vec<OptId>>,
    text: Vec<String>,
    parent: Option<NodeId>,
    depth: usize,
    handler: Option<CommandFn>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Positional arguments collected while this node was current.
    pub fn text(&self) -> &[String] {
        &self.text
    }

    pub fn commands(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.commands.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Options keyed by alias, an option shows up once per alias.
    pub fn options(&self) -> impl Iterator<Item = (&str, OptId)> {
        self.options
            .iter()
            .flat_map(|(alias, ids)| ids.iter().map(move |&id| (alias.as_str(), id)))
    }

    /// The option reachable through `alias`, `None` if there is none or
    /// several of them.
    pub fn option(&self, alias: &str) -> Option<OptId> {
        match self.options.get(alias).map(Vec::as_slice) {
            Some(&[id]) => Some(id),
            _ => None,
        }
    }

    fn insert_option(&mut self, alias: &str, id: OptId) {
        let ids = self.options.entry(alias.to_string()).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn handler(&self) -> Option<CommandFn> {
        self.handler
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("commands", &self.commands)
            .field("options", &self.options)
            .field("text", &self.text)
            .field("parent", &self.parent)
            .field("depth", &self.depth)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Result of looking an alias up among the options of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NoMatch,
    Unique(OptId),
    Ambiguous(Vec<OptId>),
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    options: Vec<OptionData>,
}

impl Tree {
    pub fn new(program: &str) -> Tree {
        let root = Node {
            kind: NodeKind::Program,
            name: program.to_string(),
            description: String::new(),
            commands: BTreeMap::new(),
            options: BTreeMap::new(),
            text: Vec::new(),
            parent: None,
            depth: 0,
            handler: None,
        };
        Tree { nodes: vec![root], options: Vec::new() }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn option(&self, id: OptId) -> &OptionData {
        &self.options[id.0]
    }

    pub fn option_mut(&mut self, id: OptId) -> &mut OptionData {
        &mut self.options[id.0]
    }

    /// Declares `name` as a command of `parent`.
    ///
    /// The command starts out with every option `parent` has at this point.
    /// Options declared on `parent` later are not inherited.
    pub fn add_command(&mut self, parent: NodeId, name: &str, description: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        let p = &self.nodes[parent.0];
        let node = Node {
            kind: NodeKind::Command,
            name: name.to_string(),
            description: description.to_string(),
            commands: BTreeMap::new(),
            options: p.options.clone(),
            text: Vec::new(),
            parent: Some(parent),
            depth: p.depth + 1,
            handler: None,
        };
        self.nodes.push(node);
        if let Some(prev) = self.nodes[parent.0].commands.insert(name.to_string(), id) {
            tracing::debug!("command `{}` redeclared, replacing {:?}", name, prev);
        }
        id
    }

    /// Stores `opt` and makes it reachable from `node` through all its aliases.
    pub fn add_option(&mut self, node: NodeId, opt: OptionData) -> OptId {
        let id = OptId(self.options.len());
        let node = &mut self.nodes[node.0];
        for alias in &opt.aliases {
            node.insert_option(alias, id);
        }
        self.options.push(opt);
        id
    }

    /// Makes `opt` reachable through `alias` from `node` only.
    ///
    /// Commands declared on `node` afterwards inherit the alias, the parent
    /// and siblings of `node` do not see it.
    pub fn add_alias(&mut self, node: NodeId, opt: OptId, alias: &str) {
        let data = &mut self.options[opt.0];
        if !data.has_alias(alias) {
            data.aliases.push(alias.to_string());
        }
        self.nodes[node.0].insert_option(alias, opt);
    }

    /// Records a placeholder for an option token nothing was declared for.
    pub fn add_unknown(&mut self, node: NodeId, name: &str, args: &[String]) -> OptId {
        self.add_option(node, OptionData::unknown(name, args))
    }

    pub fn set_handler(&mut self, node: NodeId, handler: CommandFn) {
        self.nodes[node.0].handler = Some(handler);
    }

    pub fn push_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text.push(text.to_string());
    }

    /// Direct child command of `node` named exactly `name`.
    pub fn command(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[node.0].commands.get(name).copied()
    }

    /// Finds the options reachable through `alias` at `node`.
    pub fn lookup(&self, node: NodeId, alias: &str) -> Lookup {
        let mut found = self.nodes[node.0].options.get(alias).cloned().unwrap_or_default();
        found.sort();
        match found.len() {
            0 => Lookup::NoMatch,
            1 => Lookup::Unique(found[0]),
            _ => Lookup::Ambiguous(found),
        }
    }

    /// Walks down the command names in `path`, starting at `from`.
    pub fn get_node(&self, from: NodeId, path: &[&str]) -> Result<NodeId> {
        let mut node = from;
        for name in path {
            node = self.command(node, name).ok_or_else(|| Error::NodeNotFound {
                path: path.iter().map(|it| it.to_string()).collect(),
            })?;
        }
        Ok(node)
    }

    /// Depth-first dump of `node`, one level of indentation per command.
    pub fn render(&self, node: NodeId) -> String {
        let mut buf = String::new();
        self.render_to(&mut buf, node);
        buf
    }

    fn render_to(&self, buf: &mut String, id: NodeId) {
        let node = &self.nodes[id.0];
        let pad = "  ".repeat(node.depth);
        buf.push_str(&format!("{}Name: {}, Type: {:?}", pad, node.name, node.kind));
        if let Some(parent) = node.parent {
            buf.push_str(&format!(", Parent: {}", self.nodes[parent.0].name));
        }
        if node.options.is_empty() {
            buf.push_str(", child options: []");
        } else {
            buf.push_str(", child options: [\n");
            for &opt in node.options.values().flatten() {
                let opt = &self.options[opt.0];
                let aliases = opt.aliases.join(" ");
                buf.push_str(&format!("{}  Name: {}, Aliases [{}]\n", pad, opt.name, aliases));
            }
            buf.push_str(&format!("{}]", pad));
        }
        if node.commands.is_empty() {
            buf.push_str(", child commands: []");
        } else {
            buf.push_str(", child commands: [\n");
            for &cmd in node.commands.values() {
                self.render_to(buf, cmd);
            }
            buf.push_str(&format!("{}]", pad));
        }
        buf.push('\n');
    }
}
