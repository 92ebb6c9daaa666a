use std::sync::Arc;

use crate::ast::ScalarExpr;

/// A scalar function call with positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: String,
    pub args: Vec<Arc<ScalarExpr>>,
}
