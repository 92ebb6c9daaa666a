use std::any::Any;

use crate::ast::Literal;
use crate::storage::TypeMapping;

/// A store-type-only mapping with generic literal rendering: quoted strings,
/// bare numbers, TRUE/FALSE keywords, NULL. Good enough for columns whose
/// type needs no special treatment, and as a stand-in in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTypeMapping {
    store_type: String,
}

impl SimpleTypeMapping {
    pub fn new(store_type: impl Into<String>) -> SimpleTypeMapping {
        SimpleTypeMapping { store_type: store_type.into() }
    }
}

impl TypeMapping for SimpleTypeMapping {
    fn store_type(&self) -> &str {
        &self.store_type
    }

    fn sql_literal(&self, value: &Literal) -> String {
        crate::render::literal_sql(value)
    }

    fn matches(&self, other: &dyn TypeMapping) -> bool {
        other
            .as_any()
            .downcast_ref::<SimpleTypeMapping>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
