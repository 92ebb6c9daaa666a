pub mod ast;
pub use ast::{Column, ColumnInfo, Function, JsonTableExpr, Literal, PathSegment, ScalarExpr};

pub mod storage;
pub use storage::{BoolTypeMapping, SimpleTypeMapping, TypeMapping};

pub mod render;
pub use render::{render_json_table, render_scalar};
