//! Report renderers.
//!
//! Serializes a [`QualityReport`] to console text, a JSON document, or an
//! HTML document. Rendering never feeds back into the engine; these are
//! one-way views over the report value.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;
use askama::Template;
use tablesurveyor_core::quality::QualityReport;

/// View model for one issue row in the HTML report.
struct IssueView<'a> {
    title: String,
    severity: &'static str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    report: &'a QualityReport,
    issues: Vec<IssueView<'a>>,
}

/// Renders the report as plain console text.
pub(crate) fn render_console(report: &QualityReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Data Quality Report");
    let _ = writeln!(out, "  Source:    {}", report.source);
    let _ = writeln!(
        out,
        "  Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  Quality score    {}/100", report.overall_score);
    let _ = writeln!(out, "  Total rows       {}", report.row_count);
    let _ = writeln!(out, "  Total columns    {}", report.column_count);
    let _ = writeln!(out, "  Issues detected  {}", report.issues.len());

    if report.has_issues() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Issues Detected");
        for issue in &report.issues {
            let _ = writeln!(
                out,
                "  [{:<7}] {:<22} {}",
                issue.severity.name(),
                title_case(issue.kind.name()),
                issue.message
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Column Analysis");
    let name_width = report
        .columns
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("Column".len());
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:<8}  {:>8}  {:>8}  {:>6}",
        "Column", "Kind", "Nulls %", "Unique", "Score"
    );
    for col in &report.columns {
        let _ = writeln!(
            out,
            "  {:<name_width$}  {:<8}  {:>8}  {:>8}  {:>6}",
            col.name,
            col.kind.name(),
            col.null_pct,
            col.unique_count,
            col.quality_score
        );
    }

    out
}

/// Renders the report as an HTML document.
pub(crate) fn render_html(report: &QualityReport) -> anyhow::Result<String> {
    let issues = report
        .issues
        .iter()
        .map(|issue| IssueView {
            title: title_case(issue.kind.name()),
            severity: issue.severity.name(),
            message: &issue.message,
        })
        .collect();

    ReportTemplate { report, issues }
        .render()
        .context("failed to render HTML template")
}

/// Writes the HTML report to a file.
pub(crate) fn write_html(report: &QualityReport, path: &Path) -> anyhow::Result<()> {
    let html = render_html(report)?;
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

/// Writes the report as pretty-printed JSON.
pub(crate) fn write_json(report: &QualityReport, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// "high_null_percentage" -> "High Null Percentage"
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
