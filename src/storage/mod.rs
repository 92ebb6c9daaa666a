pub mod type_mapping;
pub use type_mapping::*;

pub mod bool_mapping;
pub use bool_mapping::*;

pub mod simple_mapping;
pub use simple_mapping::*;
