//! Error types for layout documents

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::LayoutError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid layout document: {}", .0.message())]
    Toml(#[from] toml::de::Error),

    /// Well-formed TOML describing a layout that cannot be built
    #[error("{message}")]
    Invalid { message: String, span: Option<Span> },

    #[error("{source}")]
    Layout {
        source: LayoutError,
        span: Option<Span>,
    },
}

impl DocumentError {
    pub fn invalid(message: impl Into<String>, span: Option<Span>) -> Self {
        Self::Invalid {
            message: message.into(),
            span,
        }
    }

    pub fn layout(source: LayoutError, span: Option<Span>) -> Self {
        Self::Layout { source, span }
    }

    /// Byte range of the offending TOML value, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            DocumentError::Io { .. } => None,
            DocumentError::Toml(err) => err.span(),
            DocumentError::Invalid { span, .. } | DocumentError::Layout { span, .. } => {
                span.clone()
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let message = match self {
            DocumentError::Io { .. } => return self.to_string(),
            DocumentError::Toml(err) => err.message().to_string(),
            _ => self.to_string(),
        };
        let span = self.span().unwrap_or(0..0);

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            );
        if let DocumentError::Layout { source: err, .. } = self {
            if let Some(suggestions) = err.suggestions().filter(|s| !s.is_empty()) {
                report = report.with_help(format!("did you mean: {}?", suggestions.join(", ")));
            }
        }

        let mut buf = Vec::new();
        if report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return message;
        }
        String::from_utf8(buf).unwrap_or(message)
    }
}
