use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::ast::{ColumnInfo, PathSegment, ScalarExpr};

/// The table-valued function this node models.
pub const JSON_TABLE_FUNCTION: &str = "JSON_TABLE";

/// An AST node representing a JSON_TABLE() call: a virtual tabular relation
/// declared over a path into a JSON document, optionally shredding nested
/// paths into named, typed columns.
///
/// Nodes are immutable after construction. A rewriting pass never mutates a
/// node in place; it goes through [`JsonTableExpr::update`], which hands back
/// the same `Arc` when nothing changed so that unrelated parts of the tree
/// can use pointer identity as an unchanged-subtree signal.
#[derive(Clone)]
pub struct JsonTableExpr {
    alias: String,
    source: Arc<ScalarExpr>,
    path: Option<Arc<[PathSegment]>>,
    columns: Option<Arc<[ColumnInfo]>>,
    annotations: IndexMap<String, Value>,
}

impl JsonTableExpr {
    pub fn new(alias: impl Into<String>, source: Arc<ScalarExpr>) -> JsonTableExpr {
        JsonTableExpr {
            alias: alias.into(),
            source,
            path: None,
            columns: None,
            annotations: IndexMap::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<Arc<[PathSegment]>>) -> JsonTableExpr {
        self.path = Some(path.into());
        self
    }

    pub fn with_columns(mut self, columns: impl Into<Arc<[ColumnInfo]>>) -> JsonTableExpr {
        self.columns = Some(columns.into());
        self
    }

    /// Attach a metadata entry. Annotations are carried by clones and ignored
    /// by equality.
    pub fn with_annotation(mut self, name: impl Into<String>, value: Value) -> JsonTableExpr {
        self.annotations.insert(name.into(), value);
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The JSON-producing expression, the single argument of the call.
    pub fn source(&self) -> &Arc<ScalarExpr> {
        &self.source
    }

    pub fn path(&self) -> Option<&Arc<[PathSegment]>> {
        self.path.as_ref()
    }

    pub fn columns(&self) -> Option<&Arc<[ColumnInfo]>> {
        self.columns.as_ref()
    }

    pub fn annotations(&self) -> &IndexMap<String, Value> {
        &self.annotations
    }

    /// Identity-preserving reconstruction: the single choke point through
    /// which every structural change to this node flows.
    ///
    /// Returns `Arc::clone(self)` when the new source is structurally equal
    /// to the current one and both sequences are pointer-identical or
    /// element-wise equal to the current ones. Otherwise builds a fresh node
    /// with the same alias and an empty annotation bag.
    pub fn update(
        self: &Arc<Self>,
        source: Arc<ScalarExpr>,
        path: Option<Arc<[PathSegment]>>,
        columns: Option<Arc<[ColumnInfo]>>,
    ) -> Arc<JsonTableExpr> {
        if source == self.source
            && same_sequence(path.as_ref(), self.path.as_ref())
            && same_sequence(columns.as_ref(), self.columns.as_ref())
        {
            return Arc::clone(self);
        }

        Arc::new(JsonTableExpr {
            alias: self.alias.clone(),
            source,
            path,
            columns,
            annotations: IndexMap::new(),
        })
    }

    /// Apply a generic tree-rewriting function to every sub-expression
    /// reachable from this node: the source, then each dynamic array-index
    /// expression of the path, in order.
    ///
    /// `PropertyName` segments are constants, nothing to visit. The
    /// replacement path is allocated lazily on the first changed segment;
    /// until then the original sequence is reused, so an all-identity visit
    /// returns this very node. Columns are treated as constants.
    pub fn visit_children(
        self: &Arc<Self>,
        visit: &mut impl FnMut(&Arc<ScalarExpr>) -> Arc<ScalarExpr>,
    ) -> Arc<JsonTableExpr> {
        tracing::trace!(alias = %self.alias, "rewriting JSON_TABLE children");

        let visited_source = visit(&self.source);

        let mut visited_path: Option<Vec<PathSegment>> = None;

        if let Some(path) = &self.path {
            for (i, segment) in path.iter().enumerate() {
                let replacement = match segment {
                    PathSegment::PropertyName(_) => None,
                    PathSegment::ArrayIndex(index) => {
                        let visited = visit(index);
                        if Arc::ptr_eq(&visited, index) {
                            None
                        } else {
                            Some(PathSegment::ArrayIndex(visited))
                        }
                    }
                };

                match replacement {
                    Some(new_segment) => {
                        // First change: copy the untouched prefix over.
                        let buffer = visited_path.get_or_insert_with(|| path[..i].to_vec());
                        buffer.push(new_segment);
                    }
                    None => {
                        if let Some(buffer) = visited_path.as_mut() {
                            buffer.push(segment.clone());
                        }
                    }
                }
            }
        }

        let path = match visited_path {
            Some(segments) => Some(Arc::from(segments)),
            None => self.path.clone(),
        };

        self.update(visited_source, path, self.columns.clone())
    }
}

/// Pointer-identical or element-wise equal, with both-absent counting as
/// equal. One side absent and the other present is a change.
fn same_sequence<T: PartialEq>(a: Option<&Arc<[T]>>, b: Option<&Arc<[T]>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
        _ => false,
    }
}

impl PartialEq for JsonTableExpr {
    fn eq(&self, other: &Self) -> bool {
        // Base contract: alias plus the single function argument. Column
        // lists must match in count and element-wise; annotations are
        // metadata, not identity.
        if self.alias != other.alias || self.source != other.source {
            return false;
        }

        match (&self.columns, &other.columns) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.len() == b.len() && (Arc::ptr_eq(a, b) || a == b)
            }
            _ => false,
        }
    }
}

impl Eq for JsonTableExpr {}

impl Hash for JsonTableExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Alias, function name and source argument only. Columns are left
        // out: the source dominates in practice, and equal nodes still hash
        // alike. A weak hash, accepted.
        self.alias.hash(state);
        JSON_TABLE_FUNCTION.hash(state);
        self.source.hash(state);
    }
}

impl fmt::Debug for JsonTableExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonTableExpr")
            .field("alias", &self.alias)
            .field("source", &self.source)
            .field("path", &self.path)
            .field("columns", &self.columns)
            .field("annotations", &self.annotations)
            .finish()
    }
}
