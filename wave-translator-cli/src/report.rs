//! Report generation
//!
//! Renders translated rows as an aligned text table or as JSON.

use crate::config::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wave_translator::{TranslationResult, ValueKind};

/// One translated sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Signal the sample belongs to (None for values given on the command line)
    pub signal: Option<String>,
    pub translator: String,
    pub num_bits: u32,
    pub value: String,
    pub display: String,
    pub kind: ValueKind,
}

impl ReportRow {
    pub fn new(
        signal: Option<&str>,
        translator: &str,
        num_bits: u32,
        value: &str,
        result: TranslationResult,
    ) -> Self {
        Self {
            signal: signal.map(str::to_string),
            translator: translator.to_string(),
            num_bits,
            value: value.to_string(),
            display: result.display,
            kind: result.kind,
        }
    }
}

/// Counts shown at the end of a text report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub degraded: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        Self {
            total: rows.len(),
            degraded: rows.iter().filter(|row| row.kind.is_degraded()).count(),
        }
    }
}

/// Write `rows` in the requested format
pub fn write_report(rows: &[ReportRow], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(rows, out),
        OutputFormat::Json => write_json(rows, out),
    }
}

fn write_json(rows: &[ReportRow], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(rows: &[ReportRow], out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Wave translator report ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;

    let headers = ["SIGNAL", "BITS", "TRANSLATOR", "VALUE", "DISPLAY", "KIND"];
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.signal.clone().unwrap_or_else(|| "-".to_string()),
                row.num_bits.to_string(),
                row.translator.clone(),
                row.value.clone(),
                row.display.clone(),
                row.kind.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, &headers.map(str::to_string), &widths)?;
    for line in &cells {
        write_line(out, line, &widths)?;
    }

    let summary = ReportSummary::from_rows(rows);
    writeln!(out)?;
    writeln!(
        out,
        "{} values translated, {} degraded",
        summary.total, summary.degraded
    )?;
    Ok(())
}

fn write_line(out: &mut dyn Write, cells: &[String; 6], widths: &[usize; 6]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::new(
                Some("top.bus"),
                "Hexadecimal",
                16,
                "255",
                TranslationResult::normal("0x00ff"),
            ),
            ReportRow::new(None, "Hexadecimal", 8, "abc", TranslationResult::warn("abc")),
        ]
    }

    #[test]
    fn test_summary() {
        let summary = ReportSummary::from_rows(&rows());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.degraded, 1);
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&rows(), OutputFormat::Json, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["signal"], "top.bus");
        assert_eq!(parsed[0]["display"], "0x00ff");
        assert_eq!(parsed[0]["kind"], "normal");
        assert_eq!(parsed[1]["signal"], serde_json::Value::Null);
        assert_eq!(parsed[1]["kind"], "warn");
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_report(&rows(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Wave translator report ("));
        assert!(text.contains("top.bus  16    Hexadecimal  255    0x00ff   normal"));
        assert!(text.contains("2 values translated, 1 degraded"));
    }
}
