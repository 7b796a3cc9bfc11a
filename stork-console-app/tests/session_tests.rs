//! End-to-end runs of the console against a scratch installation directory

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use stork_console_app::console::Console;
use stork_console_app::quick_setup::{QuickSetup, QuickSetupSummary};
use stork_console_app::session::{EditorSession, SessionOutcome};
use stork_console_core::{InstallLayout, ServiceContext};

async fn editor(layout: &InstallLayout, script: &str) -> (SessionOutcome, String) {
    let console = Console::new(script.as_bytes(), Vec::new());
    let mut session = EditorSession::new(console, ServiceContext::from_layout(layout));
    let outcome = session.run().await.expect("session channel");
    let (_, out) = session.into_console().into_inner();
    (outcome, String::from_utf8(out).unwrap())
}

async fn quick_setup(layout: &InstallLayout, script: &str) -> (QuickSetupSummary, String) {
    let console = Console::new(script.as_bytes(), Vec::new());
    let mut wizard = QuickSetup::new(console, ServiceContext::from_layout(layout));
    let summary = wizard.run().await.expect("wizard channel");
    let (_, out) = wizard.into_console().into_inner();
    (summary, String::from_utf8(out).unwrap())
}

fn read(path: std::path::PathBuf) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn fresh_install_through_editor_and_quick_setup() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(tmp.path().join("stork"));

    let mut console = Console::new(&b""[..], Vec::new());
    stork_console_app::bootstrap(&layout, &mut console)
        .await
        .unwrap();
    for path in [
        layout.config_path(),
        layout.accounts_path(),
        layout.proxies_path(),
        layout.tokens_path(),
    ] {
        assert!(path.exists(), "{} missing", path.display());
    }

    let (outcome, out) = editor(
        &layout,
        "1\n1\nalice@example.com\nsecret1\n2\n5\n5\n",
    )
    .await;
    assert_eq!(outcome, SessionOutcome::Exit);
    assert!(out.contains("1. alice@example.com\n"));
    assert_eq!(read(layout.accounts_path()), "alice@example.com|secret1");

    let (summary, out) = quick_setup(
        &layout,
        "\n\nno\nno\nyes\n1\nproxy.example.com:3128\nno\n",
    )
    .await;
    assert!(out.contains("Found 1 existing accounts"));
    assert_eq!(summary, QuickSetupSummary { accounts: 1, proxies: 1 });
    assert_eq!(read(layout.proxies_path()), "http://proxy.example.com:3128");

    let (_, out) = editor(&layout, "1\n3\n1\n5\n5\n").await;
    assert!(out.contains("Account removed"));
    assert_eq!(read(layout.accounts_path()), "");
    assert_eq!(read(layout.tokens_path()), "{}");
}

#[tokio::test]
async fn editor_changes_survive_a_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(tmp.path());
    layout.ensure_files().await.unwrap();

    editor(
        &layout,
        "2\n1\nhttps://u:p@10.0.0.1:8443\n2\nsocks://10.0.0.2:1080\n6\n3\n45\n\n\n\n\n5\n",
    )
    .await;

    let (_, out) = editor(&layout, "2\n3\n6\n3\n\n\n\n\n\n5\n").await;
    assert!(out.contains("Proxies found: 2"));
    assert!(out.contains("1. https://u:p@10.0.0.1:8443\n"));
    assert!(out.contains("2. socks://10.0.0.2:1080\n"));
    assert!(out.contains("[45]: "));
}

#[tokio::test]
async fn launch_choice_leaves_files_consistent() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(tmp.path());
    layout.ensure_files().await.unwrap();

    let (outcome, _) = editor(&layout, "1\n1\nbob@example.com\npw\n5\n4\n").await;

    assert_eq!(outcome, SessionOutcome::Launch);
    assert_eq!(read(layout.accounts_path()), "bob@example.com|pw");
}
