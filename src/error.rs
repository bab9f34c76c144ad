//! Error types for configuration loading

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {}", .0.message())]
    Parse(#[from] toml::de::Error),

    #[error("unknown layout '{name}' (available: {available})")]
    UnknownLayout { name: String, available: String },
}

impl ConfigError {
    /// Create an unknown layout error listing the valid names
    pub fn unknown_layout(name: impl Into<String>) -> Self {
        Self::UnknownLayout {
            name: name.into(),
            available: crate::keyboard::layout_names().collect::<Vec<_>>().join(", "),
        }
    }

    /// Location of the error in the TOML source, if known
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Parse(err) => err.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Falls back to the plain message when there is no span to point at.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };
        let message = match self {
            Self::Parse(err) => err.message().to_string(),
            _ => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid render configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| self.to_string()),
            Err(_) => self.to_string(),
        }
    }
}
