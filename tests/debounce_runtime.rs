mod common;
use crate::common::builders::{ConfigFileBuilder, MockTreeBuilder};
use crate::common::{Edit, init_tracing, spawn_edits, with_timeout};

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, timeout};

use bundlewatch::config::ConfigFile;
use bundlewatch::errors::BundlewatchError;
use bundlewatch::fs::mock::MockFileSystem;
use bundlewatch::types::{ChangeKind, ExitStatus};
use bundlewatch::watch_until_rebuild;

/// `src/` with two tracked scripts and one untracked doc.
fn project() -> MockFileSystem {
    MockTreeBuilder::new()
        .file("src/main.lua", "print('main')")
        .file("src/ui/button.luau", "return {}")
        .file("src/README.md", "# docs")
        .build()
}

fn default_config() -> ConfigFile {
    ConfigFileBuilder::new().with_root("src").build()
}

#[tokio::test(start_paused = true)]
async fn burst_of_edits_triggers_once_after_last_quiet_period() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let edits = spawn_edits(
        &fs,
        vec![
            Edit::write(50, "src/main.lua", "print('one')"),
            Edit::write(120, "src/main.lua", "print('two')"),
            Edit::write(170, "src/ui/button.luau", "return { pressed = true }"),
        ],
    );

    let start = Instant::now();
    let signal = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect("watch should end in a rebuild");
    let elapsed = start.elapsed();

    // The last edit is seen by the scan at ~200ms, so the rebuild lands
    // ~300ms after that, not 300ms after the first edit.
    assert!(
        elapsed >= Duration::from_millis(470) && elapsed <= Duration::from_millis(600),
        "rebuild after {elapsed:?}"
    );
    assert_eq!(signal.change.path, "ui/button.luau");
    assert_eq!(signal.change.kind, ChangeKind::Modified);
    assert_eq!(signal.coalesced, 2);

    edits.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn single_edit_triggers_after_one_debounce_interval() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(&fs, vec![Edit::write(50, "src/main.lua", "print('edited')")]);

    let start = Instant::now();
    let signal = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect("watch should end in a rebuild");
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(350) && elapsed <= Duration::from_millis(500),
        "rebuild after {elapsed:?}"
    );
    assert_eq!(signal.change.path, "main.lua");
    assert_eq!(signal.coalesced, 1);
    assert_eq!(
        signal.to_string(),
        format!("Updating main.lua [{}]", signal.triggered_at.format("%H:%M:%S"))
    );
}

#[tokio::test(start_paused = true)]
async fn unchanged_tree_never_triggers() {
    init_tracing();

    let fs = project();
    let cfg = default_config();

    let result = timeout(
        Duration::from_secs(3),
        watch_until_rebuild(&cfg, Arc::new(fs)),
    )
    .await;

    assert!(result.is_err(), "watch ended without any change: {result:?}");
}

#[tokio::test(start_paused = true)]
async fn edits_to_untracked_files_never_trigger() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(
        &fs,
        vec![
            Edit::write(50, "src/README.md", "# new docs"),
            Edit::write(250, "src/notes.txt", "todo"),
            Edit::write(450, "src/ui/style.css", "body {}"),
        ],
    );

    let result = timeout(
        Duration::from_secs(3),
        watch_until_rebuild(&cfg, Arc::new(fs)),
    )
    .await;

    assert!(result.is_err(), "untracked edit triggered: {result:?}");
}

#[tokio::test(start_paused = true)]
async fn touching_a_file_without_changing_content_does_not_trigger() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(&fs, vec![Edit::write(50, "src/main.lua", "print('main')")]);

    let result = timeout(
        Duration::from_secs(3),
        watch_until_rebuild(&cfg, Arc::new(fs)),
    )
    .await;

    assert!(result.is_err(), "identical rewrite triggered: {result:?}");
}

#[tokio::test(start_paused = true)]
async fn deleting_a_tracked_file_triggers() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(&fs, vec![Edit::remove(50, "src/ui/button.luau")]);

    let signal = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect("watch should end in a rebuild");

    assert_eq!(signal.change.path, "ui/button.luau");
    assert_eq!(signal.change.kind, ChangeKind::Removed);
}

#[tokio::test(start_paused = true)]
async fn creating_a_tracked_file_triggers() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(&fs, vec![Edit::write(50, "src/net/client.lua", "return 1")]);

    let signal = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect("watch should end in a rebuild");

    assert_eq!(signal.change.path, "net/client.lua");
    assert_eq!(signal.change.kind, ChangeKind::Added);
}

#[tokio::test(start_paused = true)]
async fn excluded_files_never_trigger() {
    init_tracing();

    let fs = project();
    let cfg = ConfigFileBuilder::new()
        .with_root("src")
        .with_exclude("vendor/**")
        .build();
    let _edits = spawn_edits(&fs, vec![Edit::write(50, "src/vendor/lib.lua", "return 2")]);

    let result = timeout(
        Duration::from_secs(3),
        watch_until_rebuild(&cfg, Arc::new(fs)),
    )
    .await;

    assert!(result.is_err(), "excluded file triggered: {result:?}");
}

#[tokio::test(start_paused = true)]
async fn custom_timing_is_honoured() {
    init_tracing();

    let fs = project();
    let cfg = ConfigFileBuilder::new()
        .with_root("src")
        .with_debounce_ms(1000)
        .with_poll_ms(250)
        .build();
    let _edits = spawn_edits(&fs, vec![Edit::write(100, "src/main.lua", "print('slow')")]);

    let start = Instant::now();
    with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect("watch should end in a rebuild");
    let elapsed = start.elapsed();

    // Seen at 250ms, due at 1250ms, fired by the first scan at or after it.
    assert!(
        elapsed >= Duration::from_millis(1250) && elapsed <= Duration::from_millis(1500),
        "rebuild after {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn unreadable_file_aborts_the_watch() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(&fs, vec![Edit::fail(150, "src/main.lua")]);

    let err = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect_err("scan failure should end the watch");

    assert!(matches!(err, BundlewatchError::ScanIo { .. }), "got {err:?}");
    assert_eq!(err.exit_status(), ExitStatus::RuntimeFailure);
}

#[tokio::test(start_paused = true)]
async fn missing_root_fails_the_first_scan() {
    init_tracing();

    let fs = project();
    let cfg = ConfigFileBuilder::new().with_root("does-not-exist").build();

    let err = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect_err("missing root should fail");

    assert!(matches!(err, BundlewatchError::ScanIo { .. }), "got {err:?}");
}

#[tokio::test(start_paused = true)]
async fn failure_while_armed_still_aborts() {
    init_tracing();

    let fs = project();
    let cfg = default_config();
    let _edits = spawn_edits(
        &fs,
        vec![
            Edit::write(50, "src/main.lua", "print('edited')"),
            Edit::fail(150, "src/ui"),
        ],
    );

    let err = with_timeout(watch_until_rebuild(&cfg, Arc::new(fs)))
        .await
        .expect_err("pending rebuild must not survive a failed scan");

    assert_eq!(err.exit_status(), ExitStatus::RuntimeFailure);
}
