use serde::Serialize;

/// A scalar ready for display.
///
/// How it is shown depends on where it is used: in text, booleans read
/// `true`/`false`; as an attribute, `true` is a bare attribute and `false`
/// drops the attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Empty,
    Text(String),
    Number(serde_json::Number),
    Boolean(bool),
}

impl Default for Primitive {
    fn default() -> Self {
        Self::Empty
    }
}

impl Primitive {
    pub fn as_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// text-context rendering; `None` for `Empty`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Primitive::Empty => None,
            Primitive::Text(v) => Some(v.clone()),
            Primitive::Number(v) => Some(v.to_string()),
            Primitive::Boolean(v) => Some(v.to_string()),
        }
    }

    /// attribute-context rendering: `None` drops the attribute,
    /// `Some(None)` keeps it bare.
    pub fn to_attribute(&self) -> Option<Option<String>> {
        match self {
            Primitive::Empty => None,
            Primitive::Boolean(false) => None,
            Primitive::Boolean(true) => Some(None),
            Primitive::Text(v) => Some(Some(v.clone())),
            Primitive::Number(v) => Some(Some(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, Primitive)>,
    pub children: Vec<OutputNode>,
    pub text: Primitive,
    /// position inside the enclosing list, for list items only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: vec![],
            children: vec![],
            text: Primitive::Empty,
            index: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Primitive> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// The interpreter's result: a tree of tags, attributes, children and text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputNode {
    Element(Element),
    /// siblings without a wrapping node; spliced into the parent.
    Fragment(Vec<OutputNode>),
    Empty,
}

impl OutputNode {
    pub fn is_empty(&self) -> bool {
        match self {
            OutputNode::Empty => true,
            OutputNode::Fragment(v) => v.iter().all(|n| n.is_empty()),
            OutputNode::Element(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        if let Self::Element(e) = self {
            Some(e)
        } else {
            None
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    pub fn text(&self) -> Option<String> {
        self.as_element().and_then(|e| e.text.to_text())
    }

    pub fn children(&self) -> &[OutputNode] {
        match self {
            OutputNode::Element(e) => &e.children,
            OutputNode::Fragment(v) => v,
            OutputNode::Empty => &[],
        }
    }

    /// flatten into the element nodes a parent should hold, splicing
    /// fragments and dropping empty nodes.
    pub fn into_nodes(self) -> Vec<OutputNode> {
        match self {
            OutputNode::Element(_) => vec![self],
            OutputNode::Fragment(v) => v.into_iter().flat_map(|n| n.into_nodes()).collect(),
            OutputNode::Empty => vec![],
        }
    }
}
