pub mod generation;
mod parse;
mod validate_grammar;

use anyhow::Context;

use parse::grammar_parser;
pub use parse::{FieldSpec, Grammar, Production, TypeRef};

pub use generation::Generator;

pub fn parse_grammar(kind: &str, descriptors: &[&str]) -> Result<Grammar, anyhow::Error> {
    let productions = descriptors
        .iter()
        .map(|descriptor| {
            grammar_parser::production(descriptor)
                .with_context(|| format!("malformed descriptor `{descriptor}`"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let parsed = Grammar {
        kind: kind.to_string(),
        productions,
    };

    validate_grammar::validate_grammar(&parsed)?;
    Ok(parsed)
}
