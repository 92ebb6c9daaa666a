use std::fmt;

/// A reference to a column of some relation in scope, optionally qualified
/// with the visible name of that relation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Name { name: String },
    WithRelation { relation: String, name: String },
}

impl Column {
    pub fn name(name: impl Into<String>) -> Column {
        Column::Name { name: name.into() }
    }

    pub fn qualified(relation: impl Into<String>, name: impl Into<String>) -> Column {
        Column::WithRelation { relation: relation.into(), name: name.into() }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Name { name } => write!(f, "col: {}", name),
            Column::WithRelation { relation, name } => write!(f, "col: {}.{}", relation, name),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Name { .. } => write!(f, "Column::Name({})", self),
            Column::WithRelation { .. } => write!(f, "Column::WithRelation({})", self),
        }
    }
}
