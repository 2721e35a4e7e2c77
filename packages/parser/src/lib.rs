pub mod ast;
pub mod parser;
pub mod sample;
pub mod types;

pub mod error;

pub use ast::{Reference, RenderingCode, Value};
pub use parser::{Template, TEMPLATE_VERSION};
pub use types::DataValue;
