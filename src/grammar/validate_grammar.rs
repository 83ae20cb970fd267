use std::collections::HashSet;

use anyhow::anyhow;
use beau_collector::BeauCollector;

use super::generation::capitalize;
use super::Grammar;

type ValidateResult = Result<(), anyhow::Error>;

pub fn validate_grammar(g: &Grammar) -> ValidateResult {
    let checks = [
        unique_production_names,
        exported_production_names,
        distinct_field_names,
    ];

    let _ = checks
        .into_iter()
        .map(|check| check(g))
        .bcollect::<Vec<_>>()?;

    Ok(())
}

fn unique_production_names(g: &Grammar) -> ValidateResult {
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();

    for production in &g.productions {
        if !seen.insert(production.name.as_str()) {
            duplicates.insert(production.name.clone());
        }
    }

    duplicates
        .into_iter()
        .map(|name| {
            Err::<(), anyhow::Error>(anyhow!(
                "production `{name}` is defined more than once in {} grammar",
                g.kind
            ))
        })
        .bcollect::<Vec<_>>()?;
    Ok(())
}

// production names become exported type and method names verbatim
fn exported_production_names(g: &Grammar) -> ValidateResult {
    g.productions
        .iter()
        .map(|production| {
            if production.name.starts_with(|c: char| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err(anyhow!(
                    "production `{}` does not start with an uppercase letter",
                    production.name
                ))
            }
        })
        .bcollect::<Vec<_>>()?;
    Ok(())
}

// field names collide after capitalization, not before it
fn distinct_field_names(g: &Grammar) -> ValidateResult {
    let mut errors = vec![];

    for production in &g.productions {
        let mut seen = HashSet::new();

        for field in &production.fields {
            let emitted = capitalize(&field.name);
            if !seen.insert(emitted.clone()) {
                errors.push(anyhow!(
                    "field `{emitted}` appears more than once in production `{}`",
                    production.name
                ));
            }
        }
    }

    errors
        .into_iter()
        .map(Err::<(), anyhow::Error>)
        .bcollect::<Vec<_>>()?;
    Ok(())
}
