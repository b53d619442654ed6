//! Rendered help text properties

mod common;

use cmdtree::{App, Command, ExitCode, FlagSet};
use common::{capture_app, CaptureBuf};

#[test]
fn test_commands_block_pads_to_longest_name() {
    let (mut app, out) = capture_app();
    app.register(Command::new("a").short("Alpha")).unwrap();
    app.register(Command::new("longname").short("Longer")).unwrap();

    app.run(["demo"]);

    let text = out.contents();
    assert!(text.contains(&format!("  {:<8} {}\n", "a", "Alpha")));
    assert!(text.contains(&format!("  {:<8} {}\n", "longname", "Longer")));
}

#[test]
fn test_listing_strips_trailing_period_only() {
    let (mut app, out) = capture_app();
    app.register(Command::new("tidy").short("Cleans things up."))
        .unwrap();

    app.run(["demo"]);
    // The listing drops the period.
    assert!(out.contents().contains("  tidy Cleans things up\n"));

    let (mut app, out) = capture_app();
    app.register(Command::new("tidy").short("Cleans things up."))
        .unwrap();
    app.run(["demo", "help", "tidy"]);
    // The command's own header keeps it.
    assert!(out.contents().starts_with("Cleans things up.\n"));
}

#[test]
fn test_usage_line_includes_path_usage_and_command_marker() {
    let (mut app, out) = capture_app();
    let mut remote = Command::new("remote")
        .short("Manage remotes")
        .usage("[-q]");
    remote
        .register(Command::new("add").short("Add a remote"))
        .unwrap();
    app.register(remote).unwrap();

    app.run(["demo", "help", "remote"]);

    let text = out.contents();
    assert!(text.contains("Usage:\n  demo remote [-q] <command>\n"));
    assert!(text.contains("Use 'demo remote help <command>' for more information about a command.\n"));
}

#[test]
fn test_default_suffix_tracks_zero_values() {
    let (mut app, out) = capture_app();
    app.register(
        Command::new("x")
            .short("Flag showcase")
            .flags(
                FlagSet::new("x")
                    .int("count", 0, "how many")
                    .int("retries", 3, "attempt limit")
                    .string("dir", "out", "target directory")
                    .bool("force", false, "skip checks"),
            ),
    )
    .unwrap();

    app.run(["demo", "help", "x"]);

    let text = out.contents();
    assert!(!text.contains("how many (default"));
    assert!(!text.contains("skip checks (default"));
    assert!(text.contains("attempt limit (default 3)\n"));
    assert!(text.contains("target directory (default \"out\")\n"));
}

#[test]
fn test_long_text_is_trimmed_and_appended() {
    let (mut app, out) = capture_app();
    app.register(
        Command::new("x")
            .short("Has long text")
            .long("\n  Full description over\n  several lines.  \n"),
    )
    .unwrap();

    app.run(["demo", "help", "x"]);

    assert!(out
        .contents()
        .ends_with("\nFull description over\n  several lines.\n"));
}

#[test]
fn test_help_rendering_is_idempotent() {
    let (mut app, out) = capture_app();
    app.register(
        Command::new("x")
            .short("Example command")
            .flags(FlagSet::new("x").int("retries", 3, "attempt limit")),
    )
    .unwrap();

    let (code, _) = app.run(["demo"]);
    assert_eq!(code, ExitCode::Success);
    let first = out.contents();

    app.run(["demo"]);
    let total = out.contents();

    assert_eq!(total.len(), first.len() * 2);
    assert_eq!(&total[..first.len()], &total[first.len()..]);
}

#[test]
fn test_root_short_and_long_frame_the_help() {
    let out = CaptureBuf::new();
    let mut app = App::with_name("demo")
        .stdout(out.clone())
        .short("Root summary")
        .long("Root epilogue");
    app.register(Command::new("x").short("Example command"))
        .unwrap();

    app.run(["demo"]);

    let text = out.contents();
    assert!(text.starts_with("Root summary\n"));
    assert!(text.ends_with("\nRoot epilogue\n"));
}
