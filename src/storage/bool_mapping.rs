use std::any::Any;

use crate::ast::Literal;
use crate::storage::TypeMapping;

/// Boolean store-type mapping.
///
/// Booleans always render as the `TRUE` / `FALSE` keywords, never numeric
/// `1` / `0`, regardless of the backing store type. Callers construct and
/// share instances themselves; there is no process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolTypeMapping {
    store_type: String,
    size: Option<u64>,
}

impl BoolTypeMapping {
    pub fn new(store_type: impl Into<String>) -> BoolTypeMapping {
        BoolTypeMapping { store_type: store_type.into(), size: None }
    }

    /// Copy this mapping with different storage metadata. Rendering behavior
    /// is unchanged; only the store-type text and size differ.
    pub fn with_parameters(&self, store_type: impl Into<String>, size: Option<u64>) -> BoolTypeMapping {
        let base = store_type.into();
        BoolTypeMapping {
            store_type: match size {
                Some(size) => format!("{}({})", base, size),
                None => base,
            },
            size,
        }
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }
}

impl TypeMapping for BoolTypeMapping {
    fn store_type(&self) -> &str {
        &self.store_type
    }

    fn sql_literal(&self, value: &Literal) -> String {
        match value {
            Literal::Bool(true) => "TRUE".to_string(),
            Literal::Bool(false) => "FALSE".to_string(),
            other => panic!("BoolTypeMapping cannot render {other:?}"),
        }
    }

    fn matches(&self, other: &dyn TypeMapping) -> bool {
        other
            .as_any()
            .downcast_ref::<BoolTypeMapping>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
