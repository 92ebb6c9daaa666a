use std::fmt;
use std::sync::Arc;

use crate::ast::ScalarExpr;

/// One step of a dotted path into a JSON document.
///
/// A segment is either a constant object-key literal or a dynamic array
/// index carrying its own sub-expression. Only `ArrayIndex` segments hold
/// anything a tree-rewriting pass can visit.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    PropertyName(String),
    ArrayIndex(Arc<ScalarExpr>),
}

impl PathSegment {
    pub fn property(name: impl Into<String>) -> PathSegment {
        PathSegment::PropertyName(name.into())
    }

    pub fn index(expr: Arc<ScalarExpr>) -> PathSegment {
        PathSegment::ArrayIndex(expr)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::PropertyName(name) => write!(f, "{}", name),
            PathSegment::ArrayIndex(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Debug for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::PropertyName(_) => write!(f, "PropertyName({})", self),
            PathSegment::ArrayIndex(_) => write!(f, "ArrayIndex({})", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{PathSegment, ScalarExpr};

    #[test]
    pub fn test_property_equality() {
        let a = PathSegment::property("items");
        let b = PathSegment::property("items");
        let c = PathSegment::property("tags");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    pub fn test_index_equality_is_structural() {
        let a = PathSegment::index(ScalarExpr::literal(0));
        let b = PathSegment::index(ScalarExpr::literal(0));
        let c = PathSegment::index(ScalarExpr::parameter("i"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    pub fn test_variants_never_equal() {
        let prop = PathSegment::property("0");
        let index = PathSegment::index(ScalarExpr::literal(0));

        assert_ne!(prop, index);
    }
}
