use viewcode_parser::{DataValue, RenderingCode, Value};

use super::scope::resolve;
use crate::{
    error::RuntimeError,
    types::{Element, OutputNode, Primitive},
};

const ITEM_TAG: &str = "li";

/// Evaluate a value to the scalar it displays as.
pub fn evaluate(value: &Value, context: &DataValue) -> Result<Primitive, RuntimeError> {
    match value {
        Value::Empty => Ok(Primitive::Empty),
        Value::Constant(text) => Ok(Primitive::Text(text.clone())),
        Value::Reference(reference) => {
            let data = resolve(reference, context)?;
            to_primitive(data)
        }
    }
}

// scalars pass through, `none` shows as nothing.
fn to_primitive(data: &DataValue) -> Result<Primitive, RuntimeError> {
    match data {
        DataValue::None => Ok(Primitive::Empty),
        DataValue::Boolean(v) => Ok(Primitive::Boolean(*v)),
        DataValue::Number(v) => Ok(Primitive::Number(v.clone())),
        DataValue::String(v) => Ok(Primitive::Text(v.clone())),
        DataValue::List(_) | DataValue::Dict(_) => Err(RuntimeError::UncoercibleValue {
            value_type: data.value_name(),
        }),
    }
}

/// Interpret `code` against `context`.
///
/// The first error aborts the whole render; there is no partial output.
pub fn render(code: &RenderingCode, context: &DataValue) -> Result<OutputNode, RuntimeError> {
    log::trace!("render `{}` in `{}` context", code.code_name(), context.value_name());
    match code {
        RenderingCode::HtmlElement {
            tag,
            attrs,
            inner_text,
        } => {
            let mut attributes = Vec::with_capacity(attrs.len());
            for (name, value) in attrs {
                attributes.push((name.clone(), evaluate(value, context)?));
            }
            let text = evaluate(inner_text, context)?;
            Ok(OutputNode::Element(Element {
                tag: tag.clone(),
                attributes,
                children: vec![],
                text,
                index: None,
            }))
        }
        RenderingCode::HtmlList {
            numbered,
            inner_data,
            item_code,
        } => {
            let data = resolve(inner_data, context)?;
            let items = data.as_list().ok_or_else(|| RuntimeError::NotIterable {
                value_type: data.value_name(),
            })?;
            log::debug!("expanding list over {} items", items.len());

            let mut children = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                // the item becomes the whole context of its subtree.
                let output = render(item_code, item)?;
                children.push(OutputNode::Element(to_list_item(output, index)));
            }

            let mut container = Element::new(if *numbered { "ol" } else { "ul" });
            container.children = children;
            Ok(OutputNode::Element(container))
        }
        RenderingCode::Sequence(items) => {
            let mut output = Vec::with_capacity(items.len());
            for item in items {
                output.extend(render(item, context)?.into_nodes());
            }
            Ok(OutputNode::Fragment(output))
        }
        RenderingCode::Hole => Ok(OutputNode::Empty),
    }
}

// an item that already renders to a single `li` carries the index itself,
// anything else is wrapped in one.
fn to_list_item(output: OutputNode, index: usize) -> Element {
    let mut nodes = output.into_nodes();
    let single_item = nodes.len() == 1
        && matches!(nodes.first(), Some(OutputNode::Element(e)) if e.tag == ITEM_TAG);
    if single_item {
        if let Some(OutputNode::Element(mut element)) = nodes.pop() {
            element.index = Some(index);
            return element;
        }
    }

    let mut item = Element::new(ITEM_TAG);
    item.children = nodes;
    item.index = Some(index);
    item
}
