//! Demonstration binary for cmdtree
//!
//! Builds a small nested tree (`foo` -> `bah` -> `print`) and dispatches
//! the process argument vector against it. The CLI integration tests
//! drive this binary.

use std::io::Write;
use std::process;

use cmdtree::{App, Command, ConfigResult, ExitCode, FlagSet, Invocation, Outcome};

fn main() {
    env_logger::init();

    let mut app = App::new()
        .short("Demonstrates a nested command tree")
        .long("Try 'foo bah print -capitalize some words', or 'help' at any level.");

    if let Err(e) = register_commands(&mut app) {
        eprintln!("Error: {}", e);
        process::exit(ExitCode::Serious.as_i32());
    }

    let (code, err) = app.run(std::env::args());
    if let Some(e) = err {
        eprintln!("Error: {}", e);
    }
    process::exit(code.as_i32());
}

fn register_commands(app: &mut App) -> ConfigResult<()> {
    let print = Command::new("print")
        .short("Print args to stdout")
        .usage("[-capitalize] <some text>")
        .long("Writes its positional arguments to stdout, separated by spaces.")
        .flags(FlagSet::new("print").bool("capitalize", false, "capitalize output"))
        .handler(print_args);

    let mut bah = Command::new("bah").short("Nothing else");
    bah.register(print)?;

    let mut foo = Command::new("foo").short("Nothing");
    foo.register(bah)?;

    app.register(foo)
}

fn print_args(inv: Invocation<'_>) -> Outcome {
    let mut words: Vec<String> = inv.flags.args().to_vec();
    if inv.flags.get_bool("capitalize") {
        for word in &mut words {
            *word = word.to_uppercase();
        }
    }
    if let Err(e) = writeln!(inv.stdout, "{}", words.join(" ")) {
        return (ExitCode::Failure, Some(anyhow::Error::new(e).into()));
    }
    (ExitCode::Success, None)
}
