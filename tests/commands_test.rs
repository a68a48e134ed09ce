//! End-to-end command runs over the real filesystem with a scripted
//! clipboard and selection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use si_app::{AppDeps, UseCases};
use si_app::usecases::LaunchAction;
use si_core::ports::{LauncherPort, PasteboardPort, SystemClipboardPort};
use si_core::{ClipboardPayload, StashConfig};
use si_infra::{InMemoryKeyValueStore, SystemClock, TokioFileSystem};
use si_platform::StaticSelection;
use stashit_lib::commands::{self, list::ListOptions};
use stashit_lib::notice::NoticeStyle;
use stashit_lib::paths::PathArgs;
use stashit_lib::prompt::TerminalConfirmation;

#[derive(Default)]
struct ScriptedClipboard {
    payload: ClipboardPayload,
    written: Mutex<Vec<String>>,
}

#[async_trait]
impl SystemClipboardPort for ScriptedClipboard {
    async fn read(&self) -> Result<ClipboardPayload> {
        Ok(self.payload.clone())
    }

    async fn write_file(&self, path: &str) -> Result<()> {
        self.written.lock().unwrap().push(path.to_string());
        Ok(())
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[async_trait]
impl PasteboardPort for ScriptedClipboard {
    async fn write_file_references(&self, paths: &[String]) -> Result<()> {
        self.written.lock().unwrap().extend(paths.iter().cloned());
        Ok(())
    }

    async fn declared_types(&self) -> Result<Vec<String>> {
        Ok(vec!["public.file-url".to_string()])
    }

    fn file_reference_type(&self) -> &str {
        "public.file-url"
    }
}

#[derive(Default)]
struct RecordingLauncher {
    launched: Mutex<Vec<String>>,
}

#[async_trait]
impl LauncherPort for RecordingLauncher {
    async fn open(&self, path: &Path) -> Result<()> {
        self.launched.lock().unwrap().push(format!("open {}", path.display()));
        Ok(())
    }

    async fn reveal(&self, path: &Path) -> Result<()> {
        self.launched.lock().unwrap().push(format!("reveal {}", path.display()));
        Ok(())
    }
}

fn use_cases(selection: Vec<String>, clipboard: ScriptedClipboard) -> UseCases {
    let clipboard = Arc::new(clipboard);
    let deps = AppDeps {
        clipboard: clipboard.clone(),
        pasteboard: clipboard,
        selection: Arc::new(StaticSelection::new(selection)),
        fs: Arc::new(TokioFileSystem::new()),
        launcher: Arc::new(RecordingLauncher::default()),
        kv: Arc::new(InMemoryKeyValueStore::new()),
        clock: Arc::new(SystemClock),
        confirmation: Arc::new(TerminalConfirmation::new(true)),
    };
    UseCases::new(deps, StashConfig::default())
}

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn capture_list_and_drop_a_selection() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let a = write_file(source.path(), "a.txt", "alpha");
    let b = write_file(source.path(), "b.txt", "beta");
    let use_cases = use_cases(vec![a, b], ScriptedClipboard::default());

    let captured = commands::capture::run(&use_cases).await;
    let notice = captured.notice.unwrap();
    assert_eq!(notice.to_string(), "✓ Added to Stack: 2 items stashed");

    let listed = commands::list::run(&use_cases, ListOptions::default()).await;
    let body = listed.body.unwrap();
    assert!(body.contains("a.txt"));
    assert!(body.contains("b.txt"));

    let dest_path = dest.path().to_string_lossy().into_owned();
    let dropped = commands::drop::run(&use_cases, &PathArgs::rooted_at("/"), vec![dest_path], false).await;
    let notice = dropped.notice.unwrap();
    assert_eq!(notice.style, NoticeStyle::Success);
    assert_eq!(notice.detail.as_deref(), Some("2 items dropped, stack cleared"));
    assert_eq!(std::fs::read_to_string(dest.path().join("a.txt")).unwrap(), "alpha");
    assert_eq!(std::fs::read_to_string(dest.path().join("b.txt")).unwrap(), "beta");

    let listed = commands::list::run(&use_cases, ListOptions::default()).await;
    assert!(listed.body.is_none());
    assert_eq!(listed.notice.unwrap().title, "Stack is empty");
}

#[tokio::test]
async fn two_destinations_are_rejected() {
    let source = TempDir::new().unwrap();
    let a = write_file(source.path(), "a.txt", "alpha");
    let use_cases = use_cases(vec![a], ScriptedClipboard::default());
    commands::capture::run(&use_cases).await;

    let one = TempDir::new().unwrap();
    let two = TempDir::new().unwrap();
    let output = commands::drop::run(
        &use_cases,
        &PathArgs::rooted_at("/"),
        vec![
            one.path().to_string_lossy().into_owned(),
            two.path().to_string_lossy().into_owned(),
        ],
        false,
    )
    .await;

    assert!(output.is_failure());
    assert_eq!(output.notice.unwrap().title, "Invalid destination");
    assert_eq!(std::fs::read_dir(one.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn text_only_stack_has_nothing_to_paste() {
    let clipboard = ScriptedClipboard {
        payload: ClipboardPayload {
            files: vec![],
            text: Some("remember this".to_string()),
        },
        ..Default::default()
    };
    let use_cases = use_cases(vec![], clipboard);
    commands::capture::run(&use_cases).await;

    let output = commands::copy::run(&use_cases).await;

    assert!(output.is_failure());
    assert_eq!(output.notice.unwrap().title, "No files in stack");
}

#[tokio::test]
async fn list_json_is_machine_readable() {
    let clipboard = ScriptedClipboard {
        payload: ClipboardPayload {
            files: vec![],
            text: Some("hello".to_string()),
        },
        ..Default::default()
    };
    let use_cases = use_cases(vec![], clipboard);
    commands::capture::run(&use_cases).await;

    let output = commands::list::run(
        &use_cases,
        ListOptions {
            detail: false,
            json: true,
        },
    )
    .await;

    let json: serde_json::Value = serde_json::from_str(&output.body.unwrap()).unwrap();
    assert_eq!(json[0]["kind"], "text");
    assert_eq!(json[0]["title"], "hello");
    assert!(output.notice.is_none());
}

#[tokio::test]
async fn relative_destination_resolves_against_the_working_directory() {
    let work = TempDir::new().unwrap();
    std::fs::create_dir(work.path().join("out")).unwrap();
    let clipboard = ScriptedClipboard {
        payload: ClipboardPayload {
            files: vec![],
            text: Some("note".to_string()),
        },
        ..Default::default()
    };
    let use_cases = use_cases(vec![], clipboard);
    commands::capture::run(&use_cases).await;

    let paths = PathArgs::rooted_at(work.path());
    let output = commands::drop::run(&use_cases, &paths, vec!["out".to_string()], false).await;

    assert!(!output.is_failure(), "{:?}", output.notice);
    assert_eq!(
        std::fs::read_to_string(work.path().join("out").join("stash-text-1.txt")).unwrap(),
        "note"
    );
}

#[tokio::test]
async fn dot_destination_is_the_working_directory() {
    let work = TempDir::new().unwrap();
    let clipboard = ScriptedClipboard {
        payload: ClipboardPayload {
            files: vec![],
            text: Some("here".to_string()),
        },
        ..Default::default()
    };
    let use_cases = use_cases(vec![], clipboard);
    commands::capture::run(&use_cases).await;

    let paths = PathArgs::rooted_at(work.path());
    let output = commands::drop::run(&use_cases, &paths, vec![".".to_string()], false).await;

    assert!(!output.is_failure(), "{:?}", output.notice);
    assert!(work.path().join("stash-text-1.txt").exists());
}

#[tokio::test]
async fn relative_selection_is_captured_from_the_working_directory() {
    let work = TempDir::new().unwrap();
    write_file(work.path(), "rel.txt", "relative");
    let paths = PathArgs::rooted_at(work.path());
    let use_cases = use_cases(
        paths.resolve_all(vec!["rel.txt".to_string()]),
        ScriptedClipboard::default(),
    );

    let captured = commands::capture::run(&use_cases).await;

    assert_eq!(captured.notice.unwrap().detail.as_deref(), Some("1 item stashed"));
    let listed = commands::list::run(&use_cases, ListOptions::default()).await;
    assert!(listed.body.unwrap().contains("rel.txt"));
}

#[tokio::test]
async fn open_reports_the_file_and_rejects_text() {
    let work = TempDir::new().unwrap();
    let file = write_file(work.path(), "report.pdf", "%PDF");
    let clipboard = ScriptedClipboard {
        payload: ClipboardPayload {
            files: vec![file],
            text: Some("a note".to_string()),
        },
        ..Default::default()
    };
    let use_cases = use_cases(vec![], clipboard);
    commands::capture::run(&use_cases).await;
    let views = use_cases.list_stack().execute().await;
    let file_id = views.iter().find(|v| v.title == "report.pdf").unwrap().id.to_string();
    let text_id = views.iter().find(|v| v.title == "a note").unwrap().id.to_string();

    let opened = commands::open::run(&use_cases, file_id, LaunchAction::Reveal).await;
    assert_eq!(opened.notice.unwrap().to_string(), "✓ Shown in file manager: report.pdf");

    let rejected = commands::open::run(&use_cases, text_id, LaunchAction::Open).await;
    assert!(rejected.is_failure());
    assert_eq!(rejected.notice.unwrap().title, "Cannot open text");
}
