//! Help text rendering
//!
//! Builds the usage text for a command from its position in the tree, its
//! flag definitions, and its children. Rendering is pure string
//! construction; writing to the output stream is a separate final step.

use std::io::Write;

use crate::app::{ExitCode, Outcome};
use crate::command::Command;
use crate::error::Error;
use crate::flag::{FlagSet, Value};

/// Render the full help text for `cmd`, invoked as `path` (the command
/// names from the root down to `cmd`, in order).
pub(crate) fn render_help(cmd: &Command, path: &[String]) -> String {
    let invocation = path.join(" ");

    let mut out = format!("{}\n\nUsage:\n  {}", cmd.short, invocation);
    if !cmd.usage.is_empty() {
        out.push(' ');
        out.push_str(&cmd.usage);
    }
    if !cmd.children.is_empty() {
        out.push_str(" <command>");
    }
    out.push('\n');

    let flag_lines = flag_help(cmd.flags.as_ref());
    if !flag_lines.is_empty() {
        out.push_str("\nFlags:\n");
        out.push_str(&flag_lines);
    }

    if !cmd.children.is_empty() {
        out.push_str("\nCommands:\n");
        for child in cmd.children.values() {
            let short = child.short.strip_suffix('.').unwrap_or(&child.short);
            out.push_str(&format!(
                "  {:<width$} {}\n",
                child.name,
                short,
                width = cmd.longest_child
            ));
        }
        out.push_str(&format!(
            "\nUse '{} help <command>' for more information about a command.\n",
            invocation
        ));
    }

    let long = cmd.long.trim();
    if !long.is_empty() {
        out.push_str(&format!("\n{}\n", long));
    }

    out
}

/// Write `cmd`'s help text to `out`. Write failures are logged, not
/// surfaced.
pub(crate) fn show_help(cmd: &Command, path: &[String], out: &mut dyn Write) {
    if let Err(err) = out.write_all(render_help(cmd, path).as_bytes()) {
        log::warn!("failed to write help for {:?}: {}", cmd.name, err);
    }
}

/// Resolve an explicit `help [<command>]` request at `cmd`.
///
/// The parsed flag set's positional arguments, minus one leading `help`
/// token, name at most one child to describe.
pub(crate) fn help_for_command(
    cmd: &Command,
    flags: &FlagSet,
    path: &[String],
    out: &mut dyn Write,
) -> Outcome {
    let mut topics = flags.args();
    if topics.first().map(String::as_str) == Some("help") {
        topics = &topics[1..];
    }

    if topics.len() > 1 {
        show_help(cmd, path, out);
        return (ExitCode::Serious, Some(Error::TooManyHelpTopics));
    }

    let Some(topic) = topics.first() else {
        show_help(cmd, path, out);
        return (ExitCode::Success, None);
    };

    match cmd.children.get(topic) {
        Some(child) => {
            let mut child_path = path.to_vec();
            child_path.push(child.name.clone());
            show_help(child, &child_path, out);
            (ExitCode::Success, None)
        }
        None => {
            show_help(cmd, path, out);
            (ExitCode::Serious, Some(Error::UnknownCommand(topic.clone())))
        }
    }
}

/// One line per defined flag, in name order. Empty when the set is absent
/// or defines nothing.
fn flag_help(flags: Option<&FlagSet>) -> String {
    let Some(set) = flags else {
        return String::new();
    };
    let mut out = String::new();
    for flag in set.iter() {
        let mut line = format!("  -{}", flag.name);
        let hint = flag.default.type_hint();
        if !hint.is_empty() {
            line.push(' ');
            line.push_str(hint);
        }
        // One-letter boolean flags fit before the first tab stop; every
        // other flag gets pushed to the next one.
        if line.len() <= 4 {
            line.push('\t');
        } else {
            line.push_str("    \t");
        }
        line.push_str(&flag.usage.replace('\n', "\n    \t"));
        if !flag.default.is_zero() {
            match &flag.default {
                Value::String(s) => line.push_str(&format!(" (default {:?})", s)),
                other => line.push_str(&format!(" (default {})", other)),
            }
        }
        line.push('\n');
        out.push_str(&line);
    }
    out
}
