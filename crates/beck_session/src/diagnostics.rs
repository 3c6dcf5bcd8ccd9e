//! Diagnostic types and rendering.
//!
//! Stages produce their own error types and convert them to [`Diagnostic`]s
//! via [`IntoDiagnostic`] at the session boundary. Emission is pluggable so
//! tests can collect diagnostics into a `Vec` while the CLI renders them to
//! stderr.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::sourcemap::{SourceId, SourceMap};
use crate::span::Span;

pub mod prelude {
    pub use super::{Diagnostic, IntoDiagnostic, Severity, Snippet};
    pub use crate::sourcemap::SourceId;
    pub use crate::span::Span;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn header(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn color(self) -> Color {
        match self {
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

/// A labelled span within one source.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Snippet {
    pub label: String,
    pub source_id: SourceId,
    pub span: Span,
}

impl Snippet {
    pub fn primary(label: impl Into<String>, source_id: SourceId, span: Span) -> Self {
        Self {
            label: label.into(),
            source_id,
            span,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub snippet: Option<Snippet>,
}

impl Diagnostic {
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }

    fn new(severity: Severity) -> Self {
        Self {
            severity,
            message: String::new(),
            snippet: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    /// Render in a rustc-like layout: a colored header, the source locus,
    /// and the offending line with a caret underline.
    pub fn write_to_stream<W: WriteColor>(
        &self,
        sources: &SourceMap,
        stream: &mut W,
    ) -> io::Result<()> {
        stream.set_color(
            ColorSpec::new()
                .set_bold(true)
                .set_fg(Some(self.severity.color())),
        )?;
        write!(stream, "{}: ", self.severity.header())?;
        stream.set_color(ColorSpec::new().set_bold(true))?;
        write!(stream, "{}", self.message)?;
        stream.reset()?;
        writeln!(stream)?;

        let Some(snippet) = &self.snippet else {
            return Ok(());
        };
        let Some(source) = sources.get(snippet.source_id) else {
            return Ok(());
        };

        let (line, col) = source.line_col(snippet.span.start);
        writeln!(stream, " --> {}:{line}:{col}", source.name())?;

        let line_text = source.line(line);
        writeln!(stream, "{line:>4} | {line_text}")?;

        // Clamp the underline to the reported line; a zero-length span (such
        // as end-of-input) still gets one caret.
        let carets = snippet
            .span
            .len()
            .min(line_text.chars().count().saturating_sub(col - 1))
            .max(1);
        write!(stream, "     | {}", " ".repeat(col - 1))?;
        stream.set_color(
            ColorSpec::new()
                .set_bold(true)
                .set_fg(Some(self.severity.color())),
        )?;
        write!(stream, "{}", "^".repeat(carets))?;
        stream.reset()?;
        writeln!(stream, " {}", snippet.label)?;

        Ok(())
    }
}

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap);
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _sources: &SourceMap) {
        self.push(diagnostic);
    }
}

pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self {
            stream: StandardStream::stderr(ColorChoice::Auto),
        }
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap) {
        diagnostic
            .write_to_stream(sources, &mut self.stream)
            .expect("failed to emit diagnostic");
    }
}

pub trait IntoDiagnostic {
    fn into_diagnostic(self, source_id: SourceId) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
    fn into_diagnostic(self, _source_id: SourceId) -> Diagnostic {
        self
    }
}
