use std::fmt::Write;

use si_app::models::{count_noun, StackItemView};
use si_app::UseCases;

use super::CommandOutput;
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub detail: bool,
    pub json: bool,
}

pub async fn run(use_cases: &UseCases, options: ListOptions) -> CommandOutput {
    let views = use_cases.list_stack().execute().await;

    if options.json {
        return match serde_json::to_string_pretty(&views) {
            Ok(json) => CommandOutput::with_body(json, None),
            Err(e) => CommandOutput::notice(Notice::failure("Failed to load stack", e.to_string())),
        };
    }

    if views.is_empty() {
        return CommandOutput::notice(Notice::info(
            "Stack is empty",
            Some("Copy something and run `stashit capture`".to_string()),
        ));
    }

    let body = render(&views, options.detail);
    let summary = format!("{} in stack", count_noun(views.len(), "item"));
    CommandOutput::with_body(body, Some(Notice::info(summary, None)))
}

fn time_of(view: &StackItemView) -> String {
    view.added_at_local()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

fn render(views: &[StackItemView], detail: bool) -> String {
    let mut out = String::new();
    for view in views {
        let _ = writeln!(
            out,
            "{}  {} · {}  [{}]",
            view.title,
            view.subtitle,
            time_of(view),
            view.id
        );
        if detail {
            for line in view.detail.lines() {
                let _ = writeln!(out, "    {line}");
            }
            if let Some(added) = view.added_at_local() {
                let _ = writeln!(out, "    added {}", added.format("%Y-%m-%d %H:%M:%S"));
            }
        }
    }
    out.trim_end().to_string()
}
