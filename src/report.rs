//! Human-readable HTML report of a run

use std::path::Path;

use crate::error::{Result, SuiteError};
use crate::runner::{Summary, Verdict};

/// Render `summary` as a standalone HTML page
pub fn render(summary: &Summary, base_url: &str) -> String {
    let mut rows = String::new();

    for report in &summary.reports {
        rows.push_str(&format!(
            "      <tr class=\"{class}\"><td>{name}</td><td>{description}</td><td>{verdict}</td><td>{ms} ms</td><td>{message}</td></tr>\n",
            class = css_class(report.verdict),
            name = report.case,
            description = escape(report.case.description()),
            verdict = report.verdict,
            ms = report.elapsed.as_millis(),
            message = escape(report.message.as_deref().unwrap_or("")),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Authentication suite report</title>
    <style>
      body {{ font-family: sans-serif; }}
      table {{ border-collapse: collapse; }}
      td, th {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
      .passed {{ background: #e6ffed; }}
      .skipped {{ background: #fffbdd; }}
      .failed, .error {{ background: #ffeef0; }}
    </style>
  </head>
  <body>
    <h1>Authentication suite report</h1>
    <p>Target: {target}</p>
    <p>{summary}</p>
    <table>
      <tr><th>Case</th><th>Description</th><th>Result</th><th>Duration</th><th>Details</th></tr>
{rows}    </table>
  </body>
</html>
"#,
        target = escape(base_url),
        summary = escape(&summary.to_string()),
        rows = rows,
    )
}

pub async fn write(path: &Path, summary: &Summary, base_url: &str) -> Result<()> {
    tokio::fs::write(path, render(summary, base_url))
        .await
        .map_err(|source| SuiteError::Report {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Report written to {}", path.display());

    Ok(())
}

fn css_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "passed",
        Verdict::Skipped => "skipped",
        Verdict::Failed => "failed",
        Verdict::Error => "error",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
