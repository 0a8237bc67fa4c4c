use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COMPLETED_MESSAGE: &str = "File renaming completed.";

/// Severity of a single status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    fn marker(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }

    fn color(self) -> AnsiColor {
        match self {
            Self::Success => AnsiColor::Green,
            Self::Warning => AnsiColor::Yellow,
            Self::Error => AnsiColor::Red,
        }
    }
}

/// What happened to one mapping row or uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Renamed,
    Copied,
    NotFound,
    Unmatched,
    Error(String),
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Self::Renamed | Self::Copied => Status::Success,
            Self::NotFound | Self::Unmatched => Status::Warning,
            Self::Error(_) => Status::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }
}

/// Per-row result, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    /// Mapping sheet row in path mode (the header is row 1); the upload's
    /// 1-based position in copy mode.
    pub row: usize,
    pub old_name: String,
    /// Target name after the extension policy; `None` when no target was computed.
    pub new_name: Option<String>,
    pub outcome: Outcome,
}

impl RowReport {
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    pub fn message(&self) -> String {
        let new_name = self.new_name.as_deref().unwrap_or_default();
        match &self.outcome {
            Outcome::Renamed => format!("Renamed: {} -> {}", self.old_name, new_name),
            Outcome::Copied => format!("Renamed copy ready: {} -> {}", self.old_name, new_name),
            Outcome::NotFound => format!("File not found: {}", self.old_name),
            Outcome::Unmatched => {
                format!("No matching entry for uploaded file: {}", self.old_name)
            },
            Outcome::Error(cause) => format!("Error renaming {}: {}", self.old_name, cause),
        }
    }

    /// One status line, optionally coloured by severity.
    pub fn render(&self, use_color: bool) -> String {
        let status = self.status();
        let line = format!("{} {}", status.marker(), self.message());
        if use_color {
            status.color().paint(line).to_string()
        } else {
            line
        }
    }
}

impl fmt::Display for RowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Counts by severity over a set of row reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub succeeded: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl Tally {
    pub fn from_rows(rows: &[RowReport]) -> Self {
        rows.iter().fold(Self::default(), |mut tally, row| {
            match row.status() {
                Status::Success => tally.succeeded += 1,
                Status::Warning => tally.warnings += 1,
                Status::Error => tally.errors += 1,
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(outcome: Outcome) -> RowReport {
        RowReport {
            row: 1,
            old_name: "A.PDF".to_string(),
            new_name: Some("B.PDF".to_string()),
            outcome,
        }
    }

    #[test]
    fn test_messages_by_outcome() {
        assert_eq!(row(Outcome::Renamed).message(), "Renamed: A.PDF -> B.PDF");
        assert_eq!(
            row(Outcome::Copied).message(),
            "Renamed copy ready: A.PDF -> B.PDF"
        );
        assert_eq!(row(Outcome::NotFound).message(), "File not found: A.PDF");
        assert_eq!(
            row(Outcome::Unmatched).message(),
            "No matching entry for uploaded file: A.PDF"
        );
        assert_eq!(
            row(Outcome::Error("Permission denied".into())).message(),
            "Error renaming A.PDF: Permission denied"
        );
    }

    #[test]
    fn test_status_levels() {
        assert_eq!(Outcome::Renamed.status(), Status::Success);
        assert_eq!(Outcome::Copied.status(), Status::Success);
        assert_eq!(Outcome::NotFound.status(), Status::Warning);
        assert_eq!(Outcome::Unmatched.status(), Status::Warning);
        assert_eq!(Outcome::Error(String::new()).status(), Status::Error);
    }

    #[test]
    fn test_render_plain_and_colored() {
        let plain = row(Outcome::NotFound).render(false);
        assert_eq!(plain, "! File not found: A.PDF");

        let colored = row(Outcome::NotFound).render(true);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("File not found: A.PDF"));
    }

    #[test]
    fn test_tally() {
        let rows = vec![
            row(Outcome::Renamed),
            row(Outcome::NotFound),
            row(Outcome::Error("x".into())),
            row(Outcome::Renamed),
        ];
        assert_eq!(
            Tally::from_rows(&rows),
            Tally {
                succeeded: 2,
                warnings: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_string(&Outcome::Error("boom".into())).unwrap();
        assert_eq!(json, r#"{"kind":"error","detail":"boom"}"#);
        let json = serde_json::to_string(&Outcome::NotFound).unwrap();
        assert_eq!(json, r#"{"kind":"not_found"}"#);
    }
}
