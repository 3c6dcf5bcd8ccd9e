pub mod diagnostics;
pub mod sourcemap;
pub mod span;

use diagnostics::{DiagnosticEmitter, IntoDiagnostic, Severity};
use sourcemap::{SourceId, SourceMap};

#[derive(thiserror::Error, Debug)]
#[error("errors were emitted")]
pub struct ErrorsEmitted;

/// State shared between translations: the sources seen so far and the
/// diagnostic emitter they report through.
pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::default(),
            diagnostics,
        }
    }

    pub fn report(
        &mut self,
        diagnostic: impl IntoDiagnostic,
        source_id: SourceId,
    ) -> Result<(), ErrorsEmitted> {
        let diagnostic = diagnostic.into_diagnostic(source_id);
        let severity = diagnostic.severity;

        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);

        if severity < Severity::Error {
            Ok(())
        } else {
            Err(ErrorsEmitted)
        }
    }
}
