use std::fmt;
use std::sync::Arc;

use crate::ast::PathSegment;
use crate::storage::TypeMapping;

/// Describes one shredded output column of a JSON_TABLE relation: a name, a
/// store-type mapping, an optional sub-path relative to the row path, and
/// whether the extracted value is kept as JSON instead of a scalar.
///
/// Name uniqueness across a column list is the caller's responsibility; this
/// type does not validate it.
#[derive(Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub type_mapping: Arc<dyn TypeMapping>,
    pub path: Option<Arc<[PathSegment]>>,
    pub as_json: bool,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, type_mapping: Arc<dyn TypeMapping>) -> ColumnInfo {
        ColumnInfo {
            name: name.into(),
            type_mapping,
            path: None,
            as_json: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<Arc<[PathSegment]>>) -> ColumnInfo {
        self.path = Some(path.into());
        self
    }

    pub fn as_json(mut self) -> ColumnInfo {
        self.as_json = true;
        self
    }
}

impl PartialEq for ColumnInfo {
    fn eq(&self, other: &Self) -> bool {
        // The mapping compares through its own equality contract, not by
        // pointer identity. Absent paths on both sides count as equal.
        self.name == other.name
            && self.type_mapping.matches(other.type_mapping.as_ref())
            && self.path == other.path
            && self.as_json == other.as_json
    }
}

impl fmt::Debug for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnInfo")
            .field("name", &self.name)
            .field("store_type", &self.type_mapping.store_type())
            .field("path", &self.path)
            .field("as_json", &self.as_json)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::ast::{ColumnInfo, PathSegment, ScalarExpr};
    use crate::storage::{BoolTypeMapping, SimpleTypeMapping, TypeMapping};

    fn int_mapping() -> Arc<dyn TypeMapping> {
        Arc::new(SimpleTypeMapping::new("INT"))
    }

    #[test]
    pub fn test_equality_over_distinct_mapping_instances() {
        let a = ColumnInfo::new("id", int_mapping());
        let b = ColumnInfo::new("id", int_mapping());

        assert_eq!(a, b);
    }

    #[test]
    pub fn test_inequality_on_store_type() {
        let a = ColumnInfo::new("id", int_mapping());
        let b = ColumnInfo::new("id", Arc::new(SimpleTypeMapping::new("BIGINT")));

        assert_ne!(a, b);
    }

    #[test]
    pub fn test_inequality_across_mapping_kinds() {
        let a = ColumnInfo::new("flag", Arc::new(SimpleTypeMapping::new("tinyint(1)")));
        let b = ColumnInfo::new("flag", Arc::new(BoolTypeMapping::new("tinyint(1)")));

        assert_ne!(a, b);
    }

    #[test]
    pub fn test_both_paths_absent_are_equal() {
        let a = ColumnInfo::new("id", int_mapping());
        let b = ColumnInfo::new("id", int_mapping());

        assert!(a.path.is_none());
        assert_eq!(a, b);
    }

    #[test]
    pub fn test_path_compared_elementwise() {
        let a = ColumnInfo::new("id", int_mapping())
            .with_path(vec![PathSegment::property("id")]);
        let b = ColumnInfo::new("id", int_mapping())
            .with_path(vec![PathSegment::property("id")]);
        let c = ColumnInfo::new("id", int_mapping())
            .with_path(vec![PathSegment::index(ScalarExpr::literal(0))]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, ColumnInfo::new("id", int_mapping()));
    }

    #[test]
    pub fn test_as_json_flag_part_of_equality() {
        let a = ColumnInfo::new("raw", int_mapping());
        let b = ColumnInfo::new("raw", int_mapping()).as_json();

        assert_ne!(a, b);
    }
}
