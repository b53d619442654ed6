//! Command tree nodes and registration
//!
//! Commands form a rooted tree. Each node owns its children; names are
//! validated and made unique among siblings at registration time.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use crate::app::{Handler, Invocation, Outcome};
use crate::error::{ConfigError, ConfigResult};
use crate::flag::FlagSet;

/// A node in the command tree.
///
/// A command may carry a handler, children, or both. Dispatching a command
/// with neither is a programming error.
pub struct Command {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) flags: Option<FlagSet>,
    pub(crate) handler: Option<Handler>,
    pub(crate) children: BTreeMap<String, Command>,
    pub(crate) longest_child: usize,
}

impl Command {
    /// Create a command with the given name and no other configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            usage: String::new(),
            short: String::new(),
            long: String::new(),
            flags: None,
            handler: None,
            children: BTreeMap::new(),
            longest_child: 0,
        }
    }

    /// One-line description shown in the parent's command listing.
    /// Required for every registered command; should not end with
    /// punctuation (a trailing period is stripped in listings).
    pub fn short(mut self, text: impl Into<String>) -> Self {
        self.short = text.into();
        self
    }

    /// Full help text, trimmed of surrounding whitespace when printed.
    pub fn long(mut self, text: impl Into<String>) -> Self {
        self.long = text.into();
        self
    }

    /// Brief syntax of the command's own flags and arguments. Use `[]`
    /// for optional parameters and `<>` for values the user replaces.
    pub fn usage(mut self, text: impl Into<String>) -> Self {
        self.usage = text.into();
        self
    }

    /// Flags recognized at this command. Commands without a flag set get
    /// an empty one at execution time.
    pub fn flags(mut self, flags: FlagSet) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Function run when dispatch resolves to this command.
    pub fn handler<F>(mut self, f: F) -> Self
    where
        F: Fn(Invocation<'_>) -> Outcome + 'static,
    {
        self.handler = Some(Box::new(f));
        self
    }

    /// The command's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered children, in name order.
    pub fn children(&self) -> impl Iterator<Item = &Command> {
        self.children.values()
    }

    /// Register `child` as a subcommand of this command.
    ///
    /// The child's name must be unique among this command's children and
    /// consist of lowercase alphanumeric groups joined by single hyphens,
    /// with no leading or trailing hyphen. The child must also carry a
    /// short description. Violations are configuration mistakes in the
    /// embedding program, not user input errors; callers are expected to
    /// abort startup on any of them.
    pub fn register(&mut self, child: Command) -> ConfigResult<()> {
        if child.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if child.short.is_empty() {
            return Err(ConfigError::MissingShort(child.name));
        }
        if !valid_name(&child.name) {
            return Err(ConfigError::InvalidName(child.name));
        }
        if self.children.contains_key(&child.name) {
            return Err(ConfigError::DuplicateName(child.name));
        }
        log::debug!("registered {:?} under {:?}", child.name, self.name);
        self.longest_child = self.longest_child.max(child.name.len());
        self.children.insert(child.name.clone(), child);
        Ok(())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Check a command name: lowercase alphanumeric groups joined by single
/// hyphens, with no leading or trailing hyphen.
fn valid_name(name: &str) -> bool {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$")
        .unwrap()
        .is_match(name)
}
