//! Minimal owned XML element tree with an indenting writer.
//!
//! Elements carry attributes in insertion order and nested children only;
//! no text nodes are needed for mxGraph documents. Childless elements are
//! written self-closing (`<mxCell id="0"/>`).

use std::fmt::Write;

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    #[inline]
    #[must_use]
    pub fn child(mut self, el: Element) -> Self {
        self.children.push(el);
        self
    }

    #[inline]
    pub fn push(&mut self, el: Element) {
        self.children.push(el);
    }

    /// Whole document: declaration line followed by this element.
    #[must_use]
    pub fn to_document(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            // writing to a String cannot fail
            let _ = write!(out, r#" {key}="{}""#, escape_xml(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        for c in &self.children {
            c.write_into(out, depth + 1);
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push_str(">\n");
    }
}

/// Escape the five XML special characters for use in attribute values.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_indent() {
        let doc = Element::new("a")
            .attr("k", "v")
            .child(Element::new("b").child(Element::new("c").attr("x", "1")))
            .to_document();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <a k=\"v\">\n  <b>\n    <c x=\"1\"/>\n  </b>\n</a>\n"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut el = Element::new("cell");
        el.push(Element::new("g"));
        let el = el.attr("value", r#"<Tom & "Jerry's">"#);
        let doc = el.to_document();
        assert!(doc.contains(r#"value="&lt;Tom &amp; &quot;Jerry&apos;s&quot;&gt;""#));
        assert!(doc.contains("  <g/>\n"));
    }
}
