use std::{fs::read_to_string, path::Path};

use anyhow::{anyhow, Context};
use viewcode_parser::{DataValue, RenderingCode, Template};
use viewcode_runtime::OutputNode;

pub fn load_code(file_name: &str, raw: bool) -> anyhow::Result<RenderingCode> {
    let content = read_to_string(Path::new(file_name))
        .with_context(|| format!("cannot read template `{file_name}`"))?;
    let code = if raw {
        RenderingCode::from_json(&content)?
    } else {
        Template::from_json(&content)?.code
    };
    Ok(code)
}

/// a missing data file renders against `none`.
pub fn load_data(file_name: Option<&str>) -> anyhow::Result<DataValue> {
    match file_name {
        Some(file_name) => {
            let content = read_to_string(Path::new(file_name))
                .with_context(|| format!("cannot read data `{file_name}`"))?;
            Ok(DataValue::from_json(&content)?)
        }
        None => Ok(DataValue::None),
    }
}

pub fn build(
    file_name: &str,
    data_file: Option<&str>,
    format: &str,
    raw: bool,
) -> anyhow::Result<String> {
    let output_format = OutputFormat::from_str(format);
    if let OutputFormat::Unknown = output_format {
        return Err(anyhow!("viewcode does not support `{format}` output."));
    }

    let code = load_code(file_name, raw)?;
    let data = load_data(data_file)?;
    log::info!(
        "rendering `{}` template against `{}` data",
        code.code_name(),
        data.value_name()
    );
    let node = viewcode_runtime::render(&code, &data)?;

    output_format.write(&node)
}

pub enum OutputFormat {
    Html,
    Tree,
    Unknown,
}

impl OutputFormat {
    pub fn from_str(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "html" => Self::Html,
            "tree" => Self::Tree,
            _ => Self::Unknown,
        }
    }

    fn write(&self, node: &OutputNode) -> anyhow::Result<String> {
        match self {
            OutputFormat::Html => Ok(node.to_html()?),
            OutputFormat::Tree => Ok(serde_json::to_string_pretty(node)?),
            OutputFormat::Unknown => Err(anyhow!("no writer for unknown output format.")),
        }
    }
}
