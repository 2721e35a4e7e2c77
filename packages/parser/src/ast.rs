use serde::{Deserialize, Serialize};

/// Names a location inside the current data context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    /// look up a key in the context, which must be a dict.
    Field(String),
    /// the context itself.
    Data,
}

impl Reference {
    pub fn field(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

/// Content that can appear as element text or an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Reference(Reference),
    Empty,
    Constant(String),
}

impl Default for Value {
    fn default() -> Self {
        Self::Empty
    }
}

impl Value {
    pub fn field(name: &str) -> Self {
        Self::Reference(Reference::field(name))
    }

    pub fn data() -> Self {
        Self::Reference(Reference::Data)
    }

    pub fn constant(text: &str) -> Self {
        Self::Constant(text.to_string())
    }

    pub fn as_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The view-tree instruction set.
///
/// A tree is data-independent: it is built once and can be interpreted
/// against any number of data contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderingCode {
    HtmlElement {
        tag: String,
        #[serde(default)]
        attrs: Vec<(String, Value)>,
        #[serde(default)]
        inner_text: Value,
    },
    HtmlList {
        #[serde(default)]
        numbered: bool,
        inner_data: Reference,
        item_code: Box<RenderingCode>,
    },
    Sequence(Vec<RenderingCode>),
    Hole,
}

impl RenderingCode {
    pub fn element(tag: &str, attrs: Vec<(&str, Value)>, inner_text: Value) -> Self {
        Self::HtmlElement {
            tag: tag.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            inner_text,
        }
    }

    /// element without attributes
    pub fn text(tag: &str, inner_text: Value) -> Self {
        Self::element(tag, vec![], inner_text)
    }

    pub fn list(numbered: bool, inner_data: Reference, item_code: RenderingCode) -> Self {
        Self::HtmlList {
            numbered,
            inner_data,
            item_code: Box::new(item_code),
        }
    }

    pub fn sequence(items: Vec<RenderingCode>) -> Self {
        Self::Sequence(items)
    }

    pub fn code_name(&self) -> String {
        match self {
            RenderingCode::HtmlElement { .. } => "html_element",
            RenderingCode::HtmlList { .. } => "html_list",
            RenderingCode::Sequence(_) => "sequence",
            RenderingCode::Hole => "hole",
        }
        .to_string()
    }

    pub fn hole_count(&self) -> usize {
        match self {
            RenderingCode::HtmlElement { .. } => 0,
            RenderingCode::HtmlList { item_code, .. } => item_code.hole_count(),
            RenderingCode::Sequence(items) => items.iter().map(|i| i.hole_count()).sum(),
            RenderingCode::Hole => 1,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.hole_count() == 0
    }
}
