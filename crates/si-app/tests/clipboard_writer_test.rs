//! NativeClipboardWriter strategy selection and verification.

mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use common::FakePasteboard;
use si_app::{ClipboardWriteStrategy, NativeClipboardWriter};
use si_core::ports::SystemClipboardPort;
use si_core::{ClipboardPayload, StashError};

mock! {
    pub Clipboard {}

    #[async_trait]
    impl SystemClipboardPort for Clipboard {
        async fn read(&self) -> Result<ClipboardPayload>;
        async fn write_file(&self, path: &str) -> Result<()>;
        async fn write_text(&self, text: &str) -> Result<()>;
    }
}

fn paths(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|p| p.to_string()).collect()
}

#[tokio::test]
async fn no_paths_is_no_files_to_copy() {
    let clipboard = MockClipboard::new();
    let pasteboard = Arc::new(FakePasteboard::default());
    let writer = NativeClipboardWriter::new(Arc::new(clipboard), pasteboard.clone());

    let err = writer.write_files(&paths(&["", ""])).await.unwrap_err();

    assert_eq!(err.downcast_ref::<StashError>(), Some(&StashError::NoFilesToCopy));
    assert!(pasteboard.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn one_path_uses_the_single_file_primitive() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_write_file()
        .withf(|path| path == "/Users/x/my report.pdf")
        .times(1)
        .returning(|_| Ok(()));
    let pasteboard = Arc::new(FakePasteboard::default());
    let writer = NativeClipboardWriter::new(Arc::new(clipboard), pasteboard.clone());

    let strategy = writer
        .write_files(&paths(&["file:///Users/x/my%20report.pdf"]))
        .await
        .unwrap();

    assert_eq!(strategy, ClipboardWriteStrategy::SingleFile);
    assert!(pasteboard.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn several_paths_go_through_the_pasteboard_in_order() {
    let mut clipboard = MockClipboard::new();
    clipboard.expect_write_file().never();
    let pasteboard = Arc::new(FakePasteboard::default());
    let writer = NativeClipboardWriter::new(Arc::new(clipboard), pasteboard.clone());

    let strategy = writer
        .write_files(&paths(&["/a/one.txt", "file:///b/two.txt", "/c/it's \"quoted\".txt"]))
        .await
        .unwrap();

    assert_eq!(strategy, ClipboardWriteStrategy::MultiFile { count: 3 });
    assert_eq!(
        pasteboard.writes.lock().unwrap().as_slice(),
        &[paths(&["/a/one.txt", "/b/two.txt", "/c/it's \"quoted\".txt"])]
    );
}

#[tokio::test]
async fn missing_file_type_after_write_fails_verification() {
    let clipboard = MockClipboard::new();
    let pasteboard = Arc::new(FakePasteboard {
        drop_types: true,
        ..FakePasteboard::default()
    });
    let writer = NativeClipboardWriter::new(Arc::new(clipboard), pasteboard);

    let err = writer.write_files(&paths(&["/a", "/b"])).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<StashError>(),
        Some(&StashError::WriteVerificationFailed)
    );
}

#[tokio::test]
async fn text_goes_through_the_text_primitive() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_write_text()
        .withf(|text| text == "hello")
        .times(1)
        .returning(|_| Ok(()));
    let writer = NativeClipboardWriter::new(Arc::new(clipboard), Arc::new(FakePasteboard::default()));

    assert_eq!(
        writer.write_text("hello").await.unwrap(),
        ClipboardWriteStrategy::Text
    );
}
