//! Shared fakes for si-app integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use si_app::{AppDeps, StackStore, UseCases};
use si_core::ports::*;
use si_core::{ClipboardPayload, StashConfig, StackItem};
use si_infra::{InMemoryKeyValueStore, TokioFileSystem};

pub const FILE_URL_TYPE: &str = "public.file-url";

/// Clipboard that serves a fixed payload and records every write.
#[derive(Default)]
pub struct FakeClipboard {
    pub payload: Mutex<ClipboardPayload>,
    pub written_files: Mutex<Vec<String>>,
    pub written_text: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn holding(files: &[&str], text: Option<&str>) -> Self {
        let clipboard = Self::default();
        *clipboard.payload.lock().unwrap() = ClipboardPayload {
            files: files.iter().map(|f| f.to_string()).collect(),
            text: text.map(str::to_string),
        };
        clipboard
    }
}

#[async_trait]
impl SystemClipboardPort for FakeClipboard {
    async fn read(&self) -> Result<ClipboardPayload> {
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn write_file(&self, path: &str) -> Result<()> {
        self.written_files.lock().unwrap().push(path.to_string());
        Ok(())
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        self.written_text.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Pasteboard recording multi-file payloads. Declares file URLs after a
/// write unless `drop_types` is set.
#[derive(Default)]
pub struct FakePasteboard {
    pub writes: Mutex<Vec<Vec<String>>>,
    pub drop_types: bool,
}

#[async_trait]
impl PasteboardPort for FakePasteboard {
    async fn write_file_references(&self, paths: &[String]) -> Result<()> {
        self.writes.lock().unwrap().push(paths.to_vec());
        Ok(())
    }

    async fn declared_types(&self) -> Result<Vec<String>> {
        if self.drop_types || self.writes.lock().unwrap().is_empty() {
            return Ok(vec!["public.utf8-plain-text".to_string()]);
        }
        Ok(vec![FILE_URL_TYPE.to_string(), "public.utf8-plain-text".to_string()])
    }

    fn file_reference_type(&self) -> &str {
        FILE_URL_TYPE
    }
}

#[derive(Default)]
pub struct FakeSelection {
    pub paths: Vec<String>,
    pub unavailable: bool,
}

impl FakeSelection {
    pub fn of(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            unavailable: false,
        }
    }
}

#[async_trait]
impl FileSelectionPort for FakeSelection {
    async fn selected_paths(&self) -> Result<Vec<String>> {
        if self.unavailable {
            anyhow::bail!("file manager not running");
        }
        Ok(self.paths.clone())
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Answers confirmations from a script; an exhausted script declines.
#[derive(Default)]
pub struct ScriptedConfirmation {
    answers: Mutex<VecDeque<bool>>,
    pub asked: Mutex<Vec<ConfirmPrompt>>,
}

impl ScriptedConfirmation {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.asked.lock().unwrap().iter().map(|p| p.title.clone()).collect()
    }
}

#[async_trait]
impl ConfirmationPort for ScriptedConfirmation {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool> {
        self.asked.lock().unwrap().push(prompt.clone());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}

/// Records launches; `failing` makes every launch fail.
#[derive(Default)]
pub struct FakeLauncher {
    pub opened: Mutex<Vec<String>>,
    pub revealed: Mutex<Vec<String>>,
    pub failing: bool,
}

#[async_trait]
impl LauncherPort for FakeLauncher {
    async fn open(&self, path: &Path) -> Result<()> {
        if self.failing {
            anyhow::bail!("no application for {}", path.display());
        }
        self.opened.lock().unwrap().push(path.display().to_string());
        Ok(())
    }

    async fn reveal(&self, path: &Path) -> Result<()> {
        if self.failing {
            anyhow::bail!("file manager unavailable");
        }
        self.revealed.lock().unwrap().push(path.display().to_string());
        Ok(())
    }
}

/// Fully wired fake environment over a real temp filesystem.
pub struct Harness {
    pub kv: Arc<InMemoryKeyValueStore>,
    pub clipboard: Arc<FakeClipboard>,
    pub pasteboard: Arc<FakePasteboard>,
    pub selection: Arc<FakeSelection>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub clock: Arc<FixedClock>,
    pub launcher: Arc<FakeLauncher>,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            kv: Arc::new(InMemoryKeyValueStore::new()),
            clipboard: Arc::new(FakeClipboard::default()),
            pasteboard: Arc::new(FakePasteboard::default()),
            selection: Arc::new(FakeSelection::default()),
            confirmation: Arc::new(ScriptedConfirmation::default()),
            clock: Arc::new(FixedClock(1_700_000_000_000)),
            launcher: Arc::new(FakeLauncher::default()),
        }
    }
}

impl Harness {
    pub fn deps(&self) -> AppDeps {
        AppDeps {
            clipboard: self.clipboard.clone(),
            pasteboard: self.pasteboard.clone(),
            selection: self.selection.clone(),
            fs: Arc::new(TokioFileSystem::new()),
            launcher: self.launcher.clone(),
            kv: self.kv.clone(),
            clock: self.clock.clone(),
            confirmation: self.confirmation.clone(),
        }
    }

    pub fn use_cases(&self, config: StashConfig) -> UseCases {
        UseCases::new(self.deps(), config)
    }

    pub fn store(&self) -> StackStore {
        StackStore::new(self.kv.clone())
    }

    pub async fn seed(&self, items: Vec<StackItem>) {
        self.store().append(items).await.unwrap();
    }
}
