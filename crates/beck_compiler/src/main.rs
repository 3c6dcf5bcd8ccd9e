mod cli;
mod compiler;

use clap::Parser as _;
use cli::{Cli, Command};

use beck_session::diagnostics::PrettyDiagnosticEmitter;

use crate::compiler::Compiler;

#[derive(thiserror::Error, Debug)]
enum CompilerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("errors while translating")]
    HadErrors,
}

type CompilerResult<T> = Result<T, CompilerError>;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> CompilerResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate {
            input,
            source,
            output,
        } => {
            let (name, source) = if source {
                ("<unnamed>".to_owned(), input)
            } else {
                let text = std::fs::read_to_string(&input)?;
                (input, text)
            };

            let mut compiler = Compiler::new(PrettyDiagnosticEmitter::default());
            let generated = compiler.translate(name, source)?;

            match output {
                Some(path) => std::fs::write(path, generated)?,
                None => println!("{generated}"),
            }

            Ok(())
        }
    }
}
