pub mod core;
pub mod error;
pub mod types;

pub use crate::core::io::output::{HtmlOptions, HtmlWriter};
pub use crate::core::runtime::{evaluate, render};
pub use crate::core::scope::resolve;
pub use error::{Error, RuntimeError};
pub use types::{Element, OutputNode, Primitive};

pub use viewcode_parser::{DataValue, Reference, RenderingCode, Template, Value};

/// decode a stored template and render it against `context`.
pub fn render_template(template: &str, context: &DataValue) -> Result<OutputNode, Error> {
    let template = Template::from_json(template)?;
    Ok(render(&template.code, context)?)
}
