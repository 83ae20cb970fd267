use itertools::Itertools;

use crate::grammar::{FieldSpec, Grammar, Production, TypeRef};

pub struct Generator {
    package: String,

    // every known container kind, so cross-family fields resolve to node types
    node_kinds: Vec<String>,
}

impl Generator {
    pub fn new(package: &str, families: &[Grammar]) -> Generator {
        Generator {
            package: package.to_string(),
            node_kinds: families.iter().map(|g| g.kind.clone()).collect(),
        }
    }

    pub fn generate(&self, grammar: &Grammar) -> String {
        let mut out = String::new();

        out.push_str(&self.header());
        out.push_str(&self.container_interface(grammar));
        out.push_str(&self.visitor_interface(grammar));

        for production in &grammar.productions {
            out.push_str(&self.node_struct(grammar, production));
            out.push_str(&self.accept_method(grammar, production));
        }

        out
    }

    fn header(&self) -> String {
        format!(
            "// Code generated by astgen. DO NOT EDIT.\n\npackage {}\n",
            self.package
        )
    }

    fn container_interface(&self, grammar: &Grammar) -> String {
        format!(
            "\ntype {kind}[T any] interface {{\n\tAccept(visitor {visitor}[T]) T\n}}\n",
            kind = grammar.kind,
            visitor = visitor_name(grammar),
        )
    }

    fn visitor_interface(&self, grammar: &Grammar) -> String {
        let methods = grammar
            .productions
            .iter()
            .map(|production| {
                format!(
                    "\t{method}({recv} *{node}[T]) T",
                    method = visit_method(grammar, production),
                    recv = receiver(grammar),
                    node = node_type(grammar, production),
                )
            })
            .join("\n");

        format!(
            "\ntype {visitor}[T any] interface {{\n{methods}\n}}\n",
            visitor = visitor_name(grammar),
        )
    }

    fn node_struct(&self, grammar: &Grammar, production: &Production) -> String {
        let width = production
            .fields
            .iter()
            .map(|field| capitalize(&field.name).len())
            .max()
            .unwrap_or(0);

        let fields = production
            .fields
            .iter()
            .map(|field| {
                format!(
                    "\t{name:<width$} {ty}",
                    name = capitalize(&field.name),
                    ty = self.resolve_type(field),
                )
            })
            .join("\n");

        format!(
            "\ntype {node}[T any] struct {{\n{fields}\n}}\n",
            node = node_type(grammar, production),
        )
    }

    fn accept_method(&self, grammar: &Grammar, production: &Production) -> String {
        format!(
            "\nfunc ({recv} *{node}[T]) Accept(visitor {visitor}[T]) T {{\n\treturn visitor.{method}({recv})\n}}\n",
            recv = receiver(grammar),
            node = node_type(grammar, production),
            visitor = visitor_name(grammar),
            method = visit_method(grammar, production),
        )
    }

    // total over TypeRef: payload -> T, known kind -> node-of-T, rest verbatim
    fn resolve_type(&self, field: &FieldSpec) -> String {
        let base = match &field.ty {
            TypeRef::Payload => "T".to_string(),
            TypeRef::Named(name) if self.node_kinds.iter().any(|kind| kind == name) => {
                format!("{name}[T]")
            }
            TypeRef::Named(name) => capitalize(name),
        };

        if field.repeated {
            format!("[]{base}")
        } else {
            base
        }
    }
}

fn visitor_name(grammar: &Grammar) -> String {
    format!("Visitor{}", grammar.kind)
}

fn node_type(grammar: &Grammar, production: &Production) -> String {
    format!("{}{}", production.name, grammar.kind)
}

fn visit_method(grammar: &Grammar, production: &Production) -> String {
    format!("Visit{}{}", production.name, grammar.kind)
}

fn receiver(grammar: &Grammar) -> String {
    grammar.kind.to_lowercase()
}

pub fn capitalize(ident: &str) -> String {
    let mut chars = ident.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
