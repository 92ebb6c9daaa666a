use std::any::Any;
use std::fmt;

use crate::ast::Literal;

/// The slice of the type-mapping subsystem a JSON_TABLE column depends on:
/// a store-type display string, literal rendering, and an equality contract.
///
/// Mappings travel as `Arc<dyn TypeMapping>` shared references; two column
/// specs holding different instances of the same mapping still compare equal
/// through [`TypeMapping::matches`].
pub trait TypeMapping: fmt::Debug + Send + Sync {
    /// The dialect-specific type text, e.g. `INT` or `tinyint(1)`.
    fn store_type(&self) -> &str;

    /// Render a literal of this mapping's type as SQL text.
    ///
    /// Passing a literal outside the mapping's domain is a contract
    /// violation and panics; the caller's code is wrong, not the data.
    fn sql_literal(&self, value: &Literal) -> String;

    /// Equality by the mapping's own contract, not pointer identity.
    fn matches(&self, other: &dyn TypeMapping) -> bool;

    fn as_any(&self) -> &dyn Any;
}
