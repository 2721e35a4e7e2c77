use crate::{
    error::RuntimeError,
    types::{Element, OutputNode},
};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

// names are written unescaped, so anything that could end the tag or the
// attribute is refused.
fn check_name(name: &str) -> Result<(), RuntimeError> {
    let illegal = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        });
    if illegal {
        return Err(RuntimeError::IllegalName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// attribute carrying a list item's position; `None` hides it.
    pub index_attribute: Option<String>,
    pub escape: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            index_attribute: Some("data-index".to_string()),
            escape: true,
        }
    }
}

impl HtmlOptions {
    pub fn with_index_attribute(mut self, name: Option<&str>) -> Self {
        self.index_attribute = name.map(|v| v.to_string());
        self
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

/// Serializes output nodes to markup text.
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    options: HtmlOptions,
}

impl HtmlWriter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn write(&self, node: &OutputNode) -> Result<String, RuntimeError> {
        if let Some(name) = &self.options.index_attribute {
            check_name(name)?;
        }
        let mut out = String::new();
        self.write_node(node, &mut out)?;
        Ok(out)
    }

    fn write_node(&self, node: &OutputNode, out: &mut String) -> Result<(), RuntimeError> {
        match node {
            OutputNode::Element(e) => self.write_element(e, out)?,
            OutputNode::Fragment(v) => {
                for sub in v {
                    self.write_node(sub, out)?;
                }
            }
            OutputNode::Empty => {}
        }
        Ok(())
    }

    fn write_element(&self, element: &Element, out: &mut String) -> Result<(), RuntimeError> {
        check_name(&element.tag)?;
        out.push('<');
        out.push_str(&element.tag);

        // the list annotation wins over a template attribute of the same name.
        let index_attribute = match (&self.options.index_attribute, element.index) {
            (Some(name), Some(index)) => {
                out.push_str(&format!(" {name}=\"{index}\""));
                Some(name.as_str())
            }
            _ => None,
        };
        for (name, value) in &element.attributes {
            check_name(name)?;
            if index_attribute == Some(name.as_str()) {
                continue;
            }
            match value.to_attribute() {
                Some(Some(v)) => {
                    out.push_str(&format!(" {0}=\"{1}\"", name, self.escape(&v, true)));
                }
                Some(None) => out.push_str(&format!(" {name}")),
                None => {}
            }
        }

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            out.push_str(" />");
            return Ok(());
        }
        out.push('>');

        if let Some(text) = element.text.to_text() {
            out.push_str(&self.escape(&text, false));
        }
        for sub in &element.children {
            self.write_node(sub, out)?;
        }

        out.push_str(&format!("</{}>", element.tag));
        Ok(())
    }

    fn escape(&self, text: &str, quotes: bool) -> String {
        if !self.options.escape {
            return text.to_string();
        }
        let mut r = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => r.push_str("&amp;"),
                '<' => r.push_str("&lt;"),
                '>' => r.push_str("&gt;"),
                '"' if quotes => r.push_str("&quot;"),
                _ => r.push(c),
            }
        }
        r
    }
}

impl OutputNode {
    pub fn to_html(&self) -> Result<String, RuntimeError> {
        HtmlWriter::default().write(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    fn element(tag: &str, attributes: Vec<(&str, Primitive)>, text: Primitive) -> Element {
        let mut e = Element::new(tag);
        e.attributes = attributes
            .into_iter()
            .map(|(n, v)| (n.to_string(), v))
            .collect();
        e.text = text;
        e
    }

    #[test]
    fn boolean_attributes_follow_presence_convention() {
        let checked = element(
            "input",
            vec![
                ("type", Primitive::Text("checkbox".to_string())),
                ("checked", Primitive::Boolean(true)),
            ],
            Primitive::Empty,
        );
        let unchecked = element(
            "input",
            vec![
                ("type", Primitive::Text("checkbox".to_string())),
                ("checked", Primitive::Boolean(false)),
            ],
            Primitive::Empty,
        );
        assert_eq!(
            OutputNode::Element(checked).to_html().unwrap(),
            r#"<input type="checkbox" checked />"#
        );
        assert_eq!(
            OutputNode::Element(unchecked).to_html().unwrap(),
            r#"<input type="checkbox" />"#
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let node = OutputNode::Element(element(
            "span",
            vec![("title", Primitive::Text("say \"hi\" & <go>".to_string()))],
            Primitive::Text("a < b & \"c\"".to_string()),
        ));
        assert_eq!(
            node.to_html().unwrap(),
            "<span title=\"say &quot;hi&quot; &amp; &lt;go&gt;\">a &lt; b &amp; \"c\"</span>"
        );
        let raw = HtmlWriter::new(HtmlOptions::default().with_escape(false));
        assert_eq!(raw.write(&node).unwrap(), "<span title=\"say \"hi\" & <go>\">a < b & \"c\"</span>");
    }

    #[test]
    fn list_items_carry_index_attribute() {
        let mut item = element("li", vec![], Primitive::Text("a".to_string()));
        item.index = Some(0);
        let mut list = Element::new("ul");
        list.children = vec![OutputNode::Element(item)];
        let node = OutputNode::Element(list);

        assert_eq!(node.to_html().unwrap(), r#"<ul><li data-index="0">a</li></ul>"#);

        let hidden = HtmlWriter::new(HtmlOptions::default().with_index_attribute(None));
        assert_eq!(hidden.write(&node).unwrap(), "<ul><li>a</li></ul>");

        let custom = HtmlWriter::new(HtmlOptions::default().with_index_attribute(Some("data-i")));
        assert_eq!(custom.write(&node).unwrap(), r#"<ul><li data-i="0">a</li></ul>"#);
    }

    #[test]
    fn fragments_concatenate_and_empty_writes_nothing() {
        let node = OutputNode::Fragment(vec![
            OutputNode::Element(element("h1", vec![], Primitive::Text("T".to_string()))),
            OutputNode::Empty,
            OutputNode::Element(element("p", vec![], Primitive::Number(3.into()))),
        ]);
        assert_eq!(node.to_html().unwrap(), "<h1>T</h1><p>3</p>");
        assert_eq!(OutputNode::Empty.to_html().unwrap(), "");
    }

    #[test]
    fn index_annotation_replaces_template_attribute() {
        let mut item = element(
            "li",
            vec![
                ("data-index", Primitive::Text("x".to_string())),
                ("class", Primitive::Text("todo".to_string())),
            ],
            Primitive::Text("a".to_string()),
        );
        item.index = Some(0);
        let node = OutputNode::Element(item);
        assert_eq!(
            node.to_html().unwrap(),
            r#"<li data-index="0" class="todo">a</li>"#
        );

        // without an annotation the template attribute is kept.
        let hidden = HtmlWriter::new(HtmlOptions::default().with_index_attribute(None));
        assert_eq!(
            hidden.write(&node).unwrap(),
            r#"<li data-index="x" class="todo">a</li>"#
        );
    }

    #[test]
    fn names_that_break_markup_are_refused() {
        let attribute = OutputNode::Element(element(
            "p",
            vec![("a\"><script>x</script", Primitive::Number(1.into()))],
            Primitive::Empty,
        ));
        assert_eq!(
            attribute.to_html(),
            Err(RuntimeError::IllegalName {
                name: "a\"><script>x</script".to_string()
            })
        );

        for tag in ["", "p onclick", "p>", "a/b", "x=y", "it's"] {
            let node = OutputNode::Element(Element::new(tag));
            assert!(matches!(node.to_html(), Err(RuntimeError::IllegalName { .. })), "{tag}");
        }

        let nested = OutputNode::Fragment(vec![
            OutputNode::Element(Element::new("h1")),
            OutputNode::Element(Element::new("bad tag")),
        ]);
        assert!(nested.to_html().is_err());

        let writer = HtmlWriter::new(HtmlOptions::default().with_index_attribute(Some("data i")));
        assert!(writer.write(&OutputNode::Empty).is_err());

        let fine = OutputNode::Element(element(
            "my-widget",
            vec![("aria-label", Primitive::Text("ok".to_string()))],
            Primitive::Empty,
        ));
        assert_eq!(fine.to_html().unwrap(), r#"<my-widget aria-label="ok"></my-widget>"#);
    }
}
