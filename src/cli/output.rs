//! Rendering of IMS responses to stdout

use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

use crate::api::response::{scalar_text, ImsResponse};
use crate::cli::{GlobalOpts, OutputFormat};

/// Resolve `auto` to yaml, terminal or not
pub fn effective_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => OutputFormat::Yaml,
        other => other,
    }
}

/// Print a response in the requested format
pub fn print_response(response: &Value, global: &GlobalOpts) -> Result<()> {
    let rendered = match effective_format(global.format) {
        OutputFormat::Json => serde_json::to_string_pretty(response).into_diagnostic()?,
        OutputFormat::Table => render_table(response, global.quiet),
        OutputFormat::Yaml | OutputFormat::Auto => render_yaml(response, global.quiet)?,
    };

    let rendered = rendered.trim_end();
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// Status lines followed by the data rows as YAML
///
/// Content that is not an IMS response is dumped as YAML unchanged.
pub fn render_yaml(response: &Value, quiet: bool) -> Result<String> {
    let Some(parsed) = ImsResponse::from_value(response) else {
        return serde_yml::to_string(response).into_diagnostic();
    };

    let mut out = String::new();
    if !quiet {
        for line in status_lines(&parsed) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    if !parsed.data.is_empty() {
        out.push_str(&serde_yml::to_string(&parsed.data).into_diagnostic()?);
    }
    Ok(out)
}

/// Status lines followed by the data rows as a table
pub fn render_table(response: &Value, quiet: bool) -> String {
    let Some(parsed) = ImsResponse::from_value(response) else {
        return scalar_text(response);
    };

    let mut out = String::new();
    if !quiet {
        for line in status_lines(&parsed) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    if parsed.data.is_empty() {
        return out;
    }

    let columns = parsed.columns();
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_uppercase()));
    for row in &parsed.data {
        builder.push_record(
            columns
                .iter()
                .map(|c| row.get(c).map(scalar_text).unwrap_or_default()),
        );
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&builder.build().with(Style::rounded()).to_string());
    out
}

/// One `MEMBER: rc=.. rsn=..` line per IMS member, with any message text
pub fn status_lines(response: &ImsResponse) -> Vec<String> {
    let mut lines = Vec::new();
    for (member, message) in &response.messages {
        let rc = message.rc.as_ref().map(scalar_text).unwrap_or_default();
        let rsn = message.rsn.as_ref().map(scalar_text).unwrap_or_default();
        let status = format!("rc={} rsn={}", rc, rsn);
        let status = if message.failed() {
            style(status).red().to_string()
        } else {
            style(status).green().to_string()
        };
        lines.push(format!("{}: {}", style(member).cyan(), status));
        for text in &message.msgdata {
            lines.push(format!("  {}", style(scalar_text(text)).dim()));
        }
    }
    lines
}
