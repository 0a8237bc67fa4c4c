use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// File-type filter selected by the user.
///
/// Every specific category maps to an uppercase extension (`.PDF`, `.IES`, ...);
/// `All` is the sentinel that accepts any file and never touches extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IES")]
    Ies,
    #[default]
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "GOS")]
    Gos,
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "All Files")]
    All,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid category '{input}' (expected one of: IES, PDF, GOS, PNG, all)")]
pub struct CategoryParseError {
    pub input: String,
}

impl Category {
    /// The fixed set, in the order it is offered to the user.
    pub const ALL: [Self; 5] = [Self::Ies, Self::Pdf, Self::Gos, Self::Png, Self::All];

    /// Option text as presented to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ies => "IES",
            Self::Pdf => "PDF",
            Self::Gos => "GOS",
            Self::Png => "PNG",
            Self::All => "All Files",
        }
    }

    /// Extension enforced on new names, including the leading dot.
    pub fn extension(self) -> Option<String> {
        match self {
            Self::All => None,
            other => Some(format!(".{}", other.label().to_uppercase())),
        }
    }

    pub fn is_all(self) -> bool {
        self == Self::All
    }

    /// `File_Renaming_Template_<TOKEN>`, without an extension.
    pub fn template_stem(self) -> String {
        format!(
            "File_Renaming_Template_{}",
            self.label().replace(' ', "_").to_uppercase()
        )
    }

    /// `File_Renaming_Template_<TOKEN>.csv`
    pub fn template_file_name(self) -> String {
        format!("{}.csv", self.template_stem())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ies" => Ok(Self::Ies),
            "pdf" => Ok(Self::Pdf),
            "gos" => Ok(Self::Gos),
            "png" => Ok(Self::Png),
            "all" | "all files" | "all-files" | "all_files" => Ok(Self::All),
            _ => Err(CategoryParseError {
                input: s.to_string(),
            }),
        }
    }
}
