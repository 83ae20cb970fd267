#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    // the `Object` marker, resolved to the generic result parameter
    Payload,
    Named(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub ty: TypeRef,
    pub repeated: bool,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Clone, Debug)]
pub struct Grammar {
    pub kind: String,

    // table order, which is also emission order
    pub productions: Vec<Production>,
}

impl Grammar {
    pub fn artifact_name(&self) -> String {
        format!("{}.go", self.kind.to_lowercase())
    }
}

peg::parser! {

    pub grammar grammar_parser() for str {

        rule identifier() -> String =
            s:$(['a'..='z'|'A'..='Z'|'_']['a'..='z'|'A'..='Z'|'0'..='9'|'_']* ) {
                s.to_string()
            }

        rule field() -> FieldSpec =
            repeated:"[]"? ty:identifier() _ name:identifier() {
                let ty = if ty == "Object" {
                    TypeRef::Payload
                } else {
                    TypeRef::Named(ty)
                };

                FieldSpec { ty, repeated: repeated.is_some(), name }
            }

        rule comma() = _ "," _

        pub rule production() -> Production =
            _ name:identifier() _ ":" _ fields:field() ++ comma() _ {
                Production { name, fields }
            }

        rule _() = quiet!{[' ' | '\t']*}

    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::grammar_parser;
    use super::{FieldSpec, TypeRef};

    fn named(ty: &str, name: &str) -> FieldSpec {
        FieldSpec {
            ty: TypeRef::Named(ty.to_string()),
            repeated: false,
            name: name.to_string(),
        }
    }

    #[test]
    fn parses_descriptor_with_fields_in_declared_order() {
        let production =
            grammar_parser::production("Binary   : Expr left, Token operator, Expr right").unwrap();

        assert_eq!(production.name, "Binary");
        assert_eq!(
            production.fields,
            vec![
                named("Expr", "left"),
                named("Token", "operator"),
                named("Expr", "right"),
            ]
        );
    }

    #[test]
    fn object_marker_is_classified_as_payload() {
        let production = grammar_parser::production("Literal : Object value").unwrap();

        assert_eq!(
            production.fields,
            vec![FieldSpec {
                ty: TypeRef::Payload,
                repeated: false,
                name: "value".to_string(),
            }]
        );
    }

    #[test]
    fn bracket_prefix_marks_repeated_fields() {
        let production =
            grammar_parser::production("Call : Expr callee, []Expr arguments").unwrap();

        assert!(!production.fields[0].repeated);
        assert!(production.fields[1].repeated);
        assert_eq!(production.fields[1].ty, TypeRef::Named("Expr".to_string()));
    }

    #[test]
    fn descriptor_without_separator_is_rejected() {
        assert!(grammar_parser::production("Binary Expr left").is_err());
    }

    #[test]
    fn descriptor_without_fields_is_rejected() {
        assert!(grammar_parser::production("Binary :").is_err());
    }
}
