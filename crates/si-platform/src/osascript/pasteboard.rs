use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, debug_span, Instrument};

use si_core::ports::PasteboardPort;

use super::{run, OsascriptError, ScriptLanguage};

/// Uniform type identifier NSPasteboard declares for file URLs.
pub const FILE_URL_TYPE: &str = "public.file-url";

const READ_TYPES_SCRIPT: &str = r#"ObjC.import('AppKit');
const types = $.NSPasteboard.generalPasteboard.types;
const out = [];
for (let i = 0; i < types.count; i++) {
  out.push(ObjC.unwrap(types.objectAtIndex(i)));
}
JSON.stringify(out);"#;

/// Writes several file references to the general pasteboard as one payload,
/// using JavaScript for Automation.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsascriptPasteboard;

impl OsascriptPasteboard {
    pub fn new() -> Self {
        Self
    }
}

/// Render `paths` as a JavaScript array literal.
///
/// JSON string escaping covers quotes, backslashes and control characters;
/// U+2028 and U+2029 are escaped as well since older JavaScript engines reject
/// them inside string literals.
pub(crate) fn js_string_array(paths: &[String]) -> Result<String> {
    let json = serde_json::to_string(paths).context("Failed to encode paths")?;
    Ok(json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029"))
}

pub(crate) fn write_script(paths: &[String]) -> Result<String> {
    Ok(format!(
        r#"ObjC.import('AppKit');
const paths = {};
const pasteboard = $.NSPasteboard.generalPasteboard;
pasteboard.clearContents;
const urls = $.NSMutableArray.alloc.init;
for (const p of paths) {{
  urls.addObject($.NSURL.fileURLWithPath(p));
}}
if (!pasteboard.writeObjects(urls)) {{
  throw new Error('Failed to write to pasteboard');
}}
'ok';"#,
        js_string_array(paths)?
    ))
}

pub(crate) fn parse_types(stdout: &str) -> Result<Vec<String>, OsascriptError> {
    serde_json::from_str(stdout.trim()).map_err(|_| OsascriptError::Output(stdout.to_string()))
}

#[async_trait]
impl PasteboardPort for OsascriptPasteboard {
    async fn write_file_references(&self, paths: &[String]) -> Result<()> {
        let script = write_script(paths)?;
        run(ScriptLanguage::JavaScript, &script)
            .instrument(debug_span!("platform.osascript.write_files", count = paths.len()))
            .await
            .context("Failed to copy files")?;
        debug!(count = paths.len(), "Wrote file URLs to pasteboard");
        Ok(())
    }

    async fn declared_types(&self) -> Result<Vec<String>> {
        let stdout = run(ScriptLanguage::JavaScript, READ_TYPES_SCRIPT).await?;
        Ok(parse_types(&stdout)?)
    }

    fn file_reference_type(&self) -> &str {
        FILE_URL_TYPE
    }
}
