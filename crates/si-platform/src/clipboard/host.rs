use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tokio::task::spawn_blocking;
use tracing::{debug, debug_span, Instrument};

use si_core::ports::{PasteboardPort, SystemClipboardPort};
use si_core::ClipboardPayload;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Run `f` against a fresh clipboard context on the blocking pool.
async fn with_context<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut ClipboardContext) -> Result<T> + Send + 'static,
{
    spawn_blocking(move || {
        let mut ctx = map_clipboard_err(ClipboardContext::new())
            .context("Failed to create clipboard context")?;
        f(&mut ctx)
    })
    .await
    .context("Clipboard task panicked")?
}

/// Form in which `clipboard-rs` expects file entries on this platform.
#[cfg(target_os = "linux")]
fn file_entry(path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file://{}", encoded.join("/"))
}

#[cfg(not(target_os = "linux"))]
fn file_entry(path: &str) -> String {
    path.to_string()
}

/// Type `clipboard-rs` reports for file lists on this platform.
#[cfg(target_os = "macos")]
const FILE_LIST_TYPE: &str = "public.file-url";
#[cfg(target_os = "windows")]
const FILE_LIST_TYPE: &str = "CF_HDROP";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FILE_LIST_TYPE: &str = "text/uri-list";

/// Host clipboard through `clipboard-rs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardRsClipboard;

impl ClipboardRsClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SystemClipboardPort for ClipboardRsClipboard {
    async fn read(&self) -> Result<ClipboardPayload> {
        let payload = with_context(|ctx| {
            let files = if ctx.has(ContentFormat::Files) {
                ctx.get_files().unwrap_or_default()
            } else {
                Vec::new()
            };
            let text = if ctx.has(ContentFormat::Text) {
                ctx.get_text().ok()
            } else {
                None
            };
            Ok(ClipboardPayload { files, text })
        })
        .instrument(debug_span!("platform.clipboard.read"))
        .await?;

        debug!(
            files = payload.files.len(),
            has_text = payload.text.is_some(),
            "Read clipboard"
        );
        Ok(payload)
    }

    async fn write_file(&self, path: &str) -> Result<()> {
        let entry = file_entry(path);
        with_context(move |ctx| map_clipboard_err(ctx.set_files(vec![entry]))).await?;
        debug!(%path, "Wrote file to clipboard");
        Ok(())
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        let chars = text.chars().count();
        with_context(move |ctx| map_clipboard_err(ctx.set_text(text))).await?;
        debug!(chars, "Wrote text to clipboard");
        Ok(())
    }
}

/// Multi-file pasteboard through the `clipboard-rs` file list, for hosts
/// without a scriptable pasteboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardRsPasteboard;

impl ClipboardRsPasteboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasteboardPort for ClipboardRsPasteboard {
    async fn write_file_references(&self, paths: &[String]) -> Result<()> {
        let entries: Vec<String> = paths.iter().map(|p| file_entry(p)).collect();
        let count = entries.len();
        with_context(move |ctx| map_clipboard_err(ctx.set_files(entries))).await?;
        debug!(count, "Wrote file list to clipboard");
        Ok(())
    }

    async fn declared_types(&self) -> Result<Vec<String>> {
        with_context(|ctx| {
            let mut types = map_clipboard_err(ctx.available_formats())?;
            // Normalize to the portable name whatever the backend calls it.
            if ctx.has(ContentFormat::Files) && !types.iter().any(|t| t == FILE_LIST_TYPE) {
                types.push(FILE_LIST_TYPE.to_string());
            }
            Ok(types)
        })
        .await
    }

    fn file_reference_type(&self) -> &str {
        FILE_LIST_TYPE
    }
}
