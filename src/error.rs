//! Error types for route resolution

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Ways a template can fail to resolve into a concrete path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A catch-all placeholder was given a non-list value
    #[error("expected catch-all param \"{param}\" to be a list for route {template}")]
    TypeMismatch {
        param: String,
        template: String,
        span: Span,
    },

    /// One or more placeholders had no usable value
    #[error("missing required route param(s): {} for pattern {template}", .params.join(", "))]
    MissingParameter {
        params: Vec<String>,
        template: String,
        spans: Vec<Span>,
    },

    /// Bracket syntax survived substitution
    #[error("unresolved dynamic segment(s) remain in built href: {path}")]
    UnresolvedSegment { path: String, offset: usize },
}

impl ResolveError {
    /// Names of the parameters this error is about
    pub fn params(&self) -> Vec<&str> {
        match self {
            ResolveError::TypeMismatch { param, .. } => vec![param.as_str()],
            ResolveError::MissingParameter { params, .. } => {
                params.iter().map(String::as_str).collect()
            }
            ResolveError::UnresolvedSegment { .. } => Vec::new(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, filename: &str) -> String {
        // Spans are byte offsets into the template, not character offsets
        let config = Config::default().with_index_type(IndexType::Byte);
        let mut buf = Vec::new();
        let written = match self {
            ResolveError::TypeMismatch {
                param,
                template,
                span,
            } => Report::build(ReportKind::Error, filename, span.start)
                .with_config(config)
                .with_message(self.to_string())
                .with_label(
                    Label::new((filename, span.clone()))
                        .with_message(format!("\"{}\" needs a list of path segments", param))
                        .with_color(Color::Red),
                )
                .finish()
                .write((filename, Source::from(template.as_str())), &mut buf),
            ResolveError::MissingParameter {
                params,
                template,
                spans,
            } => {
                let start = spans.first().map(|s| s.start).unwrap_or(0);
                let labels = params.iter().zip(spans).map(|(name, span)| {
                    Label::new((filename, span.clone()))
                        .with_message(format!("no value for \"{}\"", name))
                        .with_color(Color::Red)
                });
                Report::build(ReportKind::Error, filename, start)
                    .with_config(config)
                    .with_message(self.to_string())
                    .with_labels(labels)
                    .finish()
                    .write((filename, Source::from(template.as_str())), &mut buf)
            }
            ResolveError::UnresolvedSegment { path, offset } => {
                let end = (*offset + 1).min(path.len());
                Report::build(ReportKind::Error, filename, *offset)
                    .with_config(config)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, *offset..end))
                            .with_message("bracket left after substitution")
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(path.as_str())), &mut buf)
            }
        };

        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
    }
}
