use std::env;
use std::path::PathBuf;
use std::process;

mod grammar;
mod output;
mod tables;

use crate::grammar::Generator;

fn main() {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let grammars = match tables::ast_grammars() {
        Ok(grammars) => grammars,
        Err(e) => {
            eprintln!("errors in ast grammar tables");
            eprintln!("{e:#}");
            process::exit(exitcode::DATAERR)
        }
    };

    let generator = Generator::new(tables::PACKAGE, &grammars);

    for grammar in &grammars {
        let path = out_dir.join(grammar.artifact_name());
        let source = generator.generate(grammar);

        if let Err(e) = output::write_artifact(&path, &source) {
            eprintln!("{e}");
            process::exit(exitcode::IOERR)
        }

        println!(
            "wrote {} ({} productions)",
            path.display(),
            grammar.productions.len()
        );
    }
}
