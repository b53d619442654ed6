//! Application root and command execution
//!
//! [`App`] owns the root of a command tree together with the process
//! streams and environment lookup, and resolves argument vectors against
//! the tree: flags parse independently at every level, `help` is available
//! wherever there are children, and dispatch ends at a handler or at
//! rendered help text.

use std::env;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::command::Command;
use crate::error::{ConfigResult, Error};
use crate::flag::{FlagSet, ParseError};
use crate::help;

/// Process exit codes used across dispatch and handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The run completed normally.
    Success = 0,
    /// A handler reported a failure.
    Failure = 1,
    /// A usage or flag-parse failure.
    Serious = 2,
}

impl ExitCode {
    /// Numeric status for `std::process::exit`.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// What a run or a handler produced: an exit code plus an optional error
/// for the embedding program to surface.
pub type Outcome = (ExitCode, Option<Error>);

/// The function a command runs once dispatch resolves to it.
pub type Handler = Box<dyn Fn(Invocation<'_>) -> Outcome>;

/// Environment lookup handed to every handler.
pub type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Opaque per-run value threaded through to every handler, reserved for
/// future cancellation and deadline plumbing.
#[derive(Debug, Clone, Default)]
pub struct Context {
    _reserved: (),
}

impl Context {
    /// A context carrying nothing.
    pub fn background() -> Self {
        Context::default()
    }
}

/// The streams a run reads from and writes to.
pub struct Io {
    pub(crate) stdin: Box<dyn Read>,
    pub(crate) stdout: Box<dyn Write>,
    pub(crate) stderr: Box<dyn Write>,
}

impl Io {
    /// The process standard streams.
    pub fn inherited() -> Self {
        Io {
            stdin: Box::new(io::stdin()),
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }
}

/// Everything a handler receives for one invocation.
pub struct Invocation<'a> {
    /// Opaque pass-through, reserved for cancellation.
    pub context: &'a Context,
    /// Where normal output goes.
    pub stdout: &'a mut dyn Write,
    /// This command's flags, parsed; positional arguments are in
    /// [`FlagSet::args`].
    pub flags: &'a FlagSet,
    /// Environment variable lookup.
    pub getenv: &'a dyn Fn(&str) -> Option<String>,
    /// Where input comes from.
    pub stdin: &'a mut dyn Read,
    /// Where diagnostics go.
    pub stderr: &'a mut dyn Write,
}

/// The root of a command tree plus the process-level facilities every
/// handler receives.
///
/// Construct one during program initialization, register commands under
/// it, then call [`App::run`] once. Stream and environment overrides must
/// happen before the run; because streams are threaded from the app at
/// execution time, an override reaches every command in the tree.
pub struct App {
    root: Command,
    io: Io,
    getenv: EnvLookup,
}

impl App {
    /// An app whose root is named after the running binary.
    pub fn new() -> Self {
        App::with_name(program_name())
    }

    /// An app with an explicit root name. Tests use this to avoid
    /// depending on the test binary's name.
    pub fn with_name(name: impl Into<String>) -> Self {
        App {
            root: Command::new(name),
            io: Io::inherited(),
            getenv: Box::new(|key| env::var(key).ok()),
        }
    }

    /// Short description shown at the top of the root help text.
    pub fn short(mut self, text: impl Into<String>) -> Self {
        self.root.short = text.into();
        self
    }

    /// Long help text appended to the root help.
    pub fn long(mut self, text: impl Into<String>) -> Self {
        self.root.long = text.into();
        self
    }

    /// Replace the input stream handlers read from.
    pub fn stdin(mut self, stream: impl Read + 'static) -> Self {
        self.io.stdin = Box::new(stream);
        self
    }

    /// Replace the output stream help text and handlers write to.
    pub fn stdout(mut self, stream: impl Write + 'static) -> Self {
        self.io.stdout = Box::new(stream);
        self
    }

    /// Replace the diagnostic stream handlers write to.
    pub fn stderr(mut self, stream: impl Write + 'static) -> Self {
        self.io.stderr = Box::new(stream);
        self
    }

    /// Replace the environment lookup handlers receive.
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.getenv = Box::new(lookup);
        self
    }

    /// Register a command directly under the root.
    pub fn register(&mut self, command: Command) -> ConfigResult<()> {
        self.root.register(command)
    }

    /// The root command.
    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Resolve `args` against the command tree and run the selected
    /// command, returning its exit code and error verbatim. An empty
    /// `args` means the process argument vector; otherwise the first
    /// element is treated as the program name token.
    ///
    /// The caller surfaces the returned error, if any, and exits the
    /// process with the returned code.
    ///
    /// Panics if dispatch reaches a command that has neither a handler
    /// nor children.
    pub fn run<I, S>(&mut self, args: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            args = env::args().collect();
        }
        let context = Context::background();
        execute(
            &mut self.root,
            &args,
            &[],
            &mut self.io,
            self.getenv.as_ref(),
            &context,
        )
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Execute `cmd` against `args`, whose first element is the token that
/// selected `cmd`. `ancestry` holds the names of the commands above `cmd`,
/// outermost first.
fn execute(
    cmd: &mut Command,
    args: &[String],
    ancestry: &[String],
    io: &mut Io,
    getenv: &dyn Fn(&str) -> Option<String>,
    context: &Context,
) -> Outcome {
    // Both conditions are bugs in the embedding program, not user input.
    if args.is_empty() {
        panic!("cannot execute {:?} with an empty argument vector", cmd.name);
    }
    if cmd.children.is_empty() && cmd.handler.is_none() {
        panic!("command {:?} has neither a handler nor subcommands", cmd.name);
    }

    let mut path = ancestry.to_vec();
    path.push(cmd.name.clone());

    // Parse a working copy so the stored set keeps its declared defaults.
    let mut flags = match &cmd.flags {
        Some(set) => set.clone(),
        None => FlagSet::new(cmd.name.as_str()),
    };
    if let Err(err) = flags.parse(&args[1..]) {
        help::show_help(cmd, &path, io.stdout.as_mut());
        if matches!(err, ParseError::Help) {
            return (ExitCode::Success, None);
        }
        return (ExitCode::Serious, Some(Error::Flag(err)));
    }

    log::debug!(
        "dispatching {:?} with {} positional token(s)",
        path.join(" "),
        flags.args().len()
    );

    if flags.args().is_empty() {
        if let Some(handler) = &cmd.handler {
            return invoke(handler, &flags, io, getenv, context);
        }
        help::show_help(cmd, &path, io.stdout.as_mut());
        return (ExitCode::Success, None);
    }

    if flags.args()[0] == "help" {
        return help::help_for_command(cmd, &flags, &path, io.stdout.as_mut());
    }

    let first = flags.args()[0].clone();
    if let Some(child) = cmd.children.get_mut(&first) {
        let rest = flags.args().to_vec();
        return execute(child, &rest, &path, io, getenv, context);
    }

    // An unmatched token is not an error here: a command with a handler
    // treats it as a positional argument to itself.
    if let Some(handler) = &cmd.handler {
        return invoke(handler, &flags, io, getenv, context);
    }
    help::show_help(cmd, &path, io.stdout.as_mut());
    (ExitCode::Success, None)
}

/// Call a handler with the parsed flags and the app facilities.
fn invoke(
    handler: &Handler,
    flags: &FlagSet,
    io: &mut Io,
    getenv: &dyn Fn(&str) -> Option<String>,
    context: &Context,
) -> Outcome {
    handler(Invocation {
        context,
        stdout: io.stdout.as_mut(),
        flags,
        getenv,
        stdin: io.stdin.as_mut(),
        stderr: io.stderr.as_mut(),
    })
}

/// Base name of the running binary, or a fixed fallback when the argument
/// vector is empty.
fn program_name() -> String {
    env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "command".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "neither a handler nor subcommands")]
    fn test_execute_invalid_node_panics() {
        let mut app = App::with_name("demo").stdout(Vec::new());
        app.register(Command::new("bare").short("No handler, no children"))
            .unwrap();
        app.run(["demo", "bare"]);
    }

    #[test]
    #[should_panic(expected = "empty argument vector")]
    fn test_execute_empty_args_panics() {
        let mut root = Command::new("demo");
        root.register(Command::new("x").short("Child")).unwrap();
        let context = Context::background();
        execute(
            &mut root,
            &[],
            &[],
            &mut Io::inherited(),
            &|_: &str| None::<String>,
            &context,
        );
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
        assert_eq!(ExitCode::Serious.as_i32(), 2);
    }
}
