//! Cmdtree - a subcommand-tree framework for command-line programs
//!
//! Cmdtree resolves a process argument vector against a tree of named
//! subcommands, parsing flags independently at every level, and runs the
//! selected command's handler or prints generated help text. A `help
//! [<command>]` subcommand is available at every node that has children.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//!
//! use cmdtree::{App, Command, ExitCode, FlagSet};
//!
//! let mut app = App::with_name("greet").short("Greeting demo");
//! app.register(
//!     Command::new("hello")
//!         .short("Say hello")
//!         .flags(FlagSet::new("hello").bool("loud", false, "shout the greeting"))
//!         .handler(|inv| {
//!             let text = if inv.flags.get_bool("loud") { "HELLO" } else { "hello" };
//!             let _ = writeln!(inv.stdout, "{}", text);
//!             (ExitCode::Success, None)
//!         }),
//! )
//! .expect("valid command tree");
//!
//! let (code, err) = app.run(std::env::args());
//! if let Some(err) = err {
//!     eprintln!("Error: {}", err);
//! }
//! std::process::exit(code.as_i32());
//! ```

// Public modules
pub mod app;
pub mod command;
pub mod error;
pub mod flag;

mod help;

// Re-export commonly used types
pub use app::{App, Context, ExitCode, Handler, Invocation, Io, Outcome};
pub use command::Command;
pub use error::{ConfigError, ConfigResult, Error, Result};
pub use flag::FlagSet;

/// Current version of cmdtree
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
