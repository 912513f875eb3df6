//! Scripted shell sessions against real storage, end to end.

use std::path::Path;

use ice_core::{LoadSource, StorageConfig};
use ice_ui::clipboard::MemoryClipboard;
use ice_ui::shell::run_shell;
use ice_ui::{AppConfig, Planner};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const LINK: &str = "https://ice-planner.app/";

fn fixture_config() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rink.toml")
        .leak()
}

fn file_storage(dir: &Path) -> StorageConfig {
    StorageConfig {
        backend: "file".to_string(),
        location: dir.display().to_string(),
    }
}

fn run(
    planner: &mut Planner,
    script: &str,
) -> String {
    let mut output = Vec::new();
    run_shell(planner, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn fixture_config_loads() {
    let config = AppConfig::load(Some(fixture_config())).unwrap();

    assert_eq!(config.storage_config(), StorageConfig::default());
    assert_eq!(config.link.base_url, "https://rink.example/planner");
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.console);
}

#[test]
fn edits_in_one_session_are_there_in_the_next() {
    let dir = tempdir().unwrap();
    let storage = file_storage(dir.path());

    let mut first = Planner::open(&storage, LINK, Box::new(MemoryClipboard::default())).unwrap();
    let out = run(&mut first, "set team Lions\nset players 15\ngo summary\nquit\n");
    assert!(out.contains("15 players"));
    assert!(out.contains("$1230.05"));

    let second = Planner::open(&storage, LINK, Box::new(MemoryClipboard::default())).unwrap();
    assert_eq!(second.store().load_source(), Some(LoadSource::Storage));
    assert_eq!(second.store().state().team_name, "Lions");
    assert_eq!(second.store().state().players, 15);
}

#[test]
fn copy_puts_the_link_on_the_clipboard() {
    let clipboard = MemoryClipboard::default();
    let mut planner =
        Planner::open(&StorageConfig::default(), LINK, Box::new(clipboard.clone())).unwrap();

    let out = run(&mut planner, "set ice=250\ncopy\n");

    let copied = clipboard.last().unwrap();
    assert!(copied.contains("ice=250"));
    assert!(out.contains(&copied));
}

#[test]
fn shared_link_opens_the_same_plan_elsewhere() {
    let mut sender =
        Planner::open(&StorageConfig::default(), LINK, Box::new(MemoryClipboard::default()))
            .unwrap();
    run(&mut sender, "set coach 1000\nset pct 0.03\ngo settings\n");

    let dir = tempdir().unwrap();
    let receiver = Planner::open(
        &file_storage(dir.path()),
        &sender.link(),
        Box::new(MemoryClipboard::default()),
    )
    .unwrap();

    assert_eq!(receiver.store().load_source(), Some(LoadSource::Query));
    assert_eq!(receiver.store().state(), sender.store().state());
    assert_eq!(receiver.render(), sender.render());
}

#[test]
fn bad_commands_are_reported_and_the_session_continues() {
    let mut planner =
        Planner::open(&StorageConfig::default(), LINK, Box::new(MemoryClipboard::default()))
            .unwrap();

    let out = run(&mut planner, "fly\nset zamboni 3\ngo billing\nset hrs 10\n");

    assert!(out.contains("unknown command 'fly'"));
    assert!(out.contains("unknown field 'zamboni'"));
    assert!(out.contains("unknown page 'billing'"));
    assert_eq!(planner.store().state().hours, rust_decimal_macros::dec!(10));
}

#[test]
fn reset_clears_the_saved_plan() {
    let dir = tempdir().unwrap();
    let storage = file_storage(dir.path());
    let mut first = Planner::open(&storage, LINK, Box::new(MemoryClipboard::default())).unwrap();
    run(&mut first, "set team Lions\nreset\n");

    let second = Planner::open(&storage, LINK, Box::new(MemoryClipboard::default())).unwrap();

    assert_eq!(second.store().load_source(), Some(LoadSource::Defaults));
}
