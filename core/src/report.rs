//! Report lines and the persisted run log.
//!
//! RULE: outcomes are data. The exit status is derived from the
//! structure of the report (any `Outcome::Fail`), never from text.

use crate::error::{BalanceError, BalanceResult};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

pub const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Meets the target.
    Pass,
    /// Violates a hard target.
    Fail,
    /// Borderline; a soft target was missed.
    Warn,
    /// Observational, no judgment.
    Info,
    /// The check itself broke.
    Error,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass  => "PASS",
            Self::Fail  => "FAIL",
            Self::Warn  => "WARN",
            Self::Info  => "INFO",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportLine {
    Rule,
    Blank,
    Heading { title: String },
    Text { text: String },
    Outcome { kind: Outcome, message: String },
}

impl ReportLine {
    pub fn pass(message: impl Into<String>) -> Self {
        Self::Outcome { kind: Outcome::Pass, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Outcome { kind: Outcome::Fail, message: message.into() }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::Outcome { kind: Outcome::Warn, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Outcome { kind: Outcome::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Outcome { kind: Outcome::Error, message: message.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn heading(title: impl Into<String>) -> Self {
        Self::Heading { title: title.into() }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Outcome { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule                      => f.write_str(&"=".repeat(RULE_WIDTH)),
            Self::Blank                     => Ok(()),
            Self::Heading { title }         => write!(f, "--- {title} ---"),
            Self::Text { text }             => f.write_str(text),
            Self::Outcome { kind, message } => write!(f, "{kind}: {message}"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: ReportLine) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = ReportLine>) {
        self.lines.extend(lines);
    }

    pub fn count(&self, kind: Outcome) -> usize {
        self.lines.iter().filter(|l| l.outcome() == Some(kind)).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(Outcome::Fail) > 0
    }

    /// Process exit status: 1 if any check failed a hard target.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() { 1 } else { 0 }
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn write_to(&self, path: &Path) -> BalanceResult<()> {
        std::fs::write(path, self.render()).map_err(|source| BalanceError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Format whole euros with thousands separators, e.g. `€-57,865`.
pub fn format_eur(amount: f64) -> String {
    let whole = amount.round_ties_even() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("€{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_formatting() {
        assert_eq!(format_eur(0.0), "€0");
        assert_eq!(format_eur(999.0), "€999");
        assert_eq!(format_eur(1_534.0), "€1,534");
        assert_eq!(format_eur(71_755.0), "€71,755");
        assert_eq!(format_eur(1_234_567.0), "€1,234,567");
        assert_eq!(format_eur(-57_865.0), "€-57,865");
    }

    #[test]
    fn lines_render_with_labels() {
        assert_eq!(ReportLine::pass("ok").to_string(), "PASS: ok");
        assert_eq!(ReportLine::fail("bad").to_string(), "FAIL: bad");
        assert_eq!(ReportLine::heading("Grind").to_string(), "--- Grind ---");
        assert_eq!(ReportLine::Rule.to_string().len(), RULE_WIDTH);
        assert_eq!(ReportLine::Blank.to_string(), "");
    }

    #[test]
    fn failures_are_structural() {
        let mut report = Report::new();
        report.push(ReportLine::text("FAIL: this is only text"));
        report.push(ReportLine::warn("soft miss"));
        assert!(!report.has_failures());
        assert_eq!(report.exit_code(), 0);

        report.push(ReportLine::fail("hard miss"));
        assert!(report.has_failures());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.count(Outcome::Warn), 1);
    }
}
