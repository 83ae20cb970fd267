use crate::grammar::{parse_grammar, Grammar};

pub const PACKAGE: &str = "main";

// `Name : Type field, ...`; `Object` is the payload marker, `[]` a slice,
// any container kind a node reference
pub const EXPR_TABLE: &[&str] = &[
    "Binary     : Expr left, Token operator, Expr right",
    "Grouping   : Expr expression",
    "Literal    : Object value",
    "Unary      : Token operator, Expr right",
    "Variable   : Token name",
    "Assignment : Token name, Expr value",
    "Call       : Expr callee, []Expr arguments",
    "Logical    : Expr left, Token operator, Expr right",
];

pub const STMT_TABLE: &[&str] = &[
    "Expression : Expr expr",
    "Print      : Expr expr",
    "VarDeclare : Token name, Expr initialExpr",
    "Block      : []Stmt statements",
    "If         : Expr condition, Stmt thenBranch, Stmt elseBranch",
    "While      : Expr condition, Stmt body",
    "Function   : Token name, []Token params, Stmt body",
];

pub fn ast_grammars() -> Result<Vec<Grammar>, anyhow::Error> {
    Ok(vec![
        parse_grammar("Expr", EXPR_TABLE)?,
        parse_grammar("Stmt", STMT_TABLE)?,
    ])
}
