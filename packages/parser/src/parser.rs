use serde::{Deserialize, Serialize};

use crate::{ast::RenderingCode, error::ParseError};

/// Encoding version written by this crate.
pub const TEMPLATE_VERSION: u32 = 1;

/// A stored rendering code together with the version of its encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub version: u32,
    pub code: RenderingCode,
}

impl Template {
    pub fn new(code: RenderingCode) -> Self {
        Self {
            version: TEMPLATE_VERSION,
            code,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        // check the version before the tree, so a newer tree shape reports
        // the version mismatch instead of an obscure decoding error.
        let value: serde_json::Value = serde_json::from_str(text)?;
        let version = value
            .get("version")
            .map(|v| u32::deserialize(v))
            .transpose()?;
        if let Some(found) = version.filter(|v| *v != TEMPLATE_VERSION) {
            return Err(ParseError::UnsupportedVersion {
                found,
                supported: TEMPLATE_VERSION,
            });
        }

        let template = Template::deserialize(value)?;
        log::debug!(
            "decoded template v{} rooted at `{}` ({} holes)",
            template.version,
            template.code.code_name(),
            template.code.hole_count()
        );
        Ok(template)
    }

    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RenderingCode {
    /// decode a bare tree, without the versioned envelope.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let code: RenderingCode = serde_json::from_str(text)?;
        log::debug!("decoded bare `{}` rendering code", code.code_name());
        Ok(code)
    }
}
