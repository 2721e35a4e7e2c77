use viewcode_parser::{DataValue, Reference};

use crate::error::RuntimeError;

/// Resolve `reference` against the data currently in scope.
///
/// A field bound to `none` resolves fine; only a missing key (or a context
/// that is not a dict) is an unbound field.
pub fn resolve<'a>(
    reference: &Reference,
    context: &'a DataValue,
) -> Result<&'a DataValue, RuntimeError> {
    match reference {
        Reference::Data => Ok(context),
        Reference::Field(name) => context
            .as_dict()
            .and_then(|dict| dict.get(name))
            .ok_or_else(|| RuntimeError::UnboundField {
                name: name.clone(),
                value_type: context.value_name(),
            }),
    }
}
