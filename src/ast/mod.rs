pub mod literal;
pub use literal::*;

pub mod column;
pub use column::*;

pub mod function;
pub use function::*;

pub mod scalar_expr;
pub use scalar_expr::*;

pub mod path_segment;
pub use path_segment::*;

pub mod column_info;
pub use column_info::*;

pub mod json_table;
pub use json_table::*;
