use beck_codegen::generate;
use beck_session::diagnostics::DiagnosticEmitter;
use beck_session::sourcemap::Source;
use beck_session::Session;

use crate::{CompilerError, CompilerResult};

/// Drives the pipeline. Either the whole translation succeeds and the full
/// generated string is returned, or the first error is reported as a
/// diagnostic and nothing is emitted.
pub struct Compiler<D: DiagnosticEmitter> {
    pub session: Session<D>,
}

impl<D: DiagnosticEmitter> Compiler<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            session: Session::new(diagnostics),
        }
    }

    pub fn translate(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> CompilerResult<String> {
        let source_id = self.session.sources.insert(Source::new(name, source));
        let source = self
            .session
            .sources
            .get(source_id)
            .expect("source id not in sources");

        let cursor = match beck_frontend::lex(source.text()) {
            Ok(cursor) => cursor,
            Err(err) => {
                let _ = self.session.report(err, source_id);
                return Err(CompilerError::HadErrors);
            }
        };

        let module = match beck_frontend::parse(source.text(), cursor) {
            Ok(module) => module,
            Err(err) => {
                let _ = self.session.report(err, source_id);
                return Err(CompilerError::HadErrors);
            }
        };

        Ok(generate(&module))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use beck_session::diagnostics::Diagnostic;

    use super::Compiler;
    use crate::CompilerError;

    fn translate(source: &str) -> (Result<String, CompilerError>, Vec<Diagnostic>) {
        let mut compiler = Compiler::new(Vec::new());
        let result = compiler.translate("test_source", source);
        (result, compiler.session.diagnostics)
    }

    fn translate_ok(source: &str) -> String {
        let (result, diagnostics) = translate(source);
        assert!(diagnostics.is_empty());
        result.unwrap()
    }

    fn translate_err(source: &str) -> Vec<Diagnostic> {
        let (result, diagnostics) = translate(source);
        assert!(matches!(result, Err(CompilerError::HadErrors)));
        diagnostics
    }

    #[test]
    fn translates_identity_function() {
        assert_snapshot!(translate_ok("def f(x) x end"), @"function f(x) { return x };");
    }

    #[test]
    fn translates_addition() {
        assert_snapshot!(translate_ok("def add(x,y) x+y end"), @"function add(x,y) { return x+y };");
    }

    #[test]
    fn translates_empty_parameter_list() {
        assert_snapshot!(translate_ok("def noargs() 1 end"), @"function noargs() { return 1 };");
    }

    #[test]
    fn translates_definitions_in_source_order() {
        assert_eq!(
            translate_ok("def f(x,y) g(x,y) end def g(x,y) x+y end"),
            "function f(x,y) { return g(x,y) };\nfunction g(x,y) { return x+y };"
        );
    }

    #[test]
    fn callees_are_not_resolved() {
        // `h` is never defined; the call is emitted by name alone.
        assert_snapshot!(translate_ok("def f(x) h(x) end"), @"function f(x) { return h(x) };");
    }

    #[test]
    fn duplicate_names_are_accepted() {
        assert_eq!(
            translate_ok("def f(x,x) x+x end def f() 1 end"),
            "function f(x,x) { return x+x };\nfunction f() { return 1 };"
        );
    }

    #[test]
    fn empty_source_translates_to_nothing() {
        assert_eq!(translate_ok(""), "");
    }

    #[test]
    fn parse_error_reports_one_diagnostic_and_no_output() {
        let diagnostics = translate_err("def f(x");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "syntax error");
        assert_eq!(
            diagnostics[0].snippet.as_ref().unwrap().label,
            "expected `)`, found end of input"
        );
    }

    #[test]
    fn lex_error_reports_one_diagnostic_and_no_output() {
        let diagnostics = translate_err("def f(x) x end ?");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].snippet.as_ref().unwrap().label,
            "unrecognized input starting with '?'"
        );
    }
}
