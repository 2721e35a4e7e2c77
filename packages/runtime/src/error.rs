use viewcode_parser::error::ParseError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("render failed: {0}")]
    Runtime(#[from] RuntimeError),
    #[error("parse template failed: {0}")]
    Parse(#[from] ParseError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("field `{name}` is not bound in `{value_type}` context.")]
    UnboundField { name: String, value_type: String },

    #[error("cannot display `{value_type}` data as text or attribute.")]
    UncoercibleValue { value_type: String },

    #[error("cannot iterate over `{value_type}` data in a list.")]
    NotIterable { value_type: String },

    #[error("`{name}` is not a legal tag or attribute name.")]
    IllegalName { name: String },
}
