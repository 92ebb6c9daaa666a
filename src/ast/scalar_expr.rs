use std::fmt;
use std::sync::Arc;

use crate::ast::{Column, Function, Literal};

/// A scalar sub-expression of a query tree.
///
/// Nodes are shared through `Arc` so that a tree-rewriting pass can signal
/// "unchanged subtree" by handing back the same allocation: callers compare
/// with `Arc::ptr_eq` before falling back to structural equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ScalarExpr {
    Literal(Literal),
    Column(Column),
    Parameter(String),
    Function(Function),
}

impl ScalarExpr {
    pub fn literal(value: impl Into<Literal>) -> Arc<ScalarExpr> {
        Arc::new(ScalarExpr::Literal(value.into()))
    }

    pub fn column(name: &str) -> Arc<ScalarExpr> {
        Arc::new(ScalarExpr::Column(Column::name(name)))
    }

    pub fn qualified_column(relation: &str, name: &str) -> Arc<ScalarExpr> {
        Arc::new(ScalarExpr::Column(Column::qualified(relation, name)))
    }

    pub fn parameter(name: &str) -> Arc<ScalarExpr> {
        Arc::new(ScalarExpr::Parameter(name.to_string()))
    }

    pub fn function(name: &str, args: Vec<Arc<ScalarExpr>>) -> Arc<ScalarExpr> {
        Arc::new(ScalarExpr::Function(Function { name: name.to_string(), args }))
    }
}

impl fmt::Display for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(l) => write!(f, "lit: {}", l),
            ScalarExpr::Column(c) => write!(f, "{}", c),
            ScalarExpr::Parameter(p) => write!(f, "param: @{}", p),
            ScalarExpr::Function(fun) => {
                write!(f, "fn: {}(", fun.name)?;
                for (i, arg) in fun.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(_) => write!(f, "Literal({})", self),
            ScalarExpr::Column(_) => write!(f, "Column({})", self),
            ScalarExpr::Parameter(_) => write!(f, "Parameter({})", self),
            ScalarExpr::Function(_) => write!(f, "Function({})", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::ast::{Literal, ScalarExpr};

    #[test]
    pub fn test_structural_equality_across_allocations() {
        let a = ScalarExpr::literal(3);
        let b = ScalarExpr::literal(3);

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    pub fn test_parameter_inequality() {
        let a = ScalarExpr::parameter("idx");
        let b = ScalarExpr::parameter("other");

        assert_ne!(a, b);
    }

    #[test]
    pub fn test_function_equality_is_elementwise() {
        let a = ScalarExpr::function("json_extract", vec![ScalarExpr::column("doc")]);
        let b = ScalarExpr::function("json_extract", vec![ScalarExpr::column("doc")]);

        assert_eq!(a, b);

        let c = ScalarExpr::function("json_extract", vec![ScalarExpr::column("other")]);
        assert_ne!(a, c);
    }

    #[test]
    pub fn test_literal_from_conversions() {
        match &*ScalarExpr::literal(true) {
            ScalarExpr::Literal(Literal::Bool(value)) => assert!(*value),
            other => panic!("expected Bool literal, got {other:?}"),
        }

        match &*ScalarExpr::literal("items") {
            ScalarExpr::Literal(Literal::String(value)) => assert_eq!(value, "items"),
            other => panic!("expected String literal, got {other:?}"),
        }
    }
}
