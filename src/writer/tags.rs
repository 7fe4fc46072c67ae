use std::borrow::Cow;
use std::io::Write;

use super::error::WriteError;
use super::indent::IndentLevel;

/// Escapes the XML-reserved characters in an attribute value or text node.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Writes tags and attribute lists to a sink, keeping the indent level in
/// step with element nesting.
///
/// Attributes are passed as an ordered `(key, value)` slice; a `None` value
/// marks an optional attribute the source did not supply, and it is omitted
/// entirely rather than emitted as an empty string.
#[derive(Debug)]
pub struct TagWriter<W: Write> {
    sink: W,
    indent: IndentLevel,
}

impl<W: Write> TagWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            indent: IndentLevel::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// Returns the indent prefix nested fragments should use.
    pub fn current_indent(&self) -> String {
        self.indent.current()
    }

    /// Hands out the sink for delegated fragments (profiles, aliases).
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Opens `<name ...>` on its own line and steps into the nested scope.
    pub fn open_tag(
        &mut self,
        name: &str,
        attributes: &[(&str, Option<String>)],
    ) -> Result<(), WriteError> {
        self.write_tag_start(name, attributes)?;
        writeln!(self.sink, ">")?;
        self.indent.increment();
        Ok(())
    }

    /// Writes a childless `<name .../>` element; the depth does not change.
    pub fn empty_tag(
        &mut self,
        name: &str,
        attributes: &[(&str, Option<String>)],
    ) -> Result<(), WriteError> {
        self.write_tag_start(name, attributes)?;
        writeln!(self.sink, "/>")?;
        Ok(())
    }

    /// Writes `<name ...>text</name>` as a single line; the depth does not
    /// change.
    pub fn text_tag(
        &mut self,
        name: &str,
        attributes: &[(&str, Option<String>)],
        text: &str,
    ) -> Result<(), WriteError> {
        self.write_tag_start(name, attributes)?;
        writeln!(self.sink, ">{}</{}>", escape_xml(text), name)?;
        Ok(())
    }

    /// Closes `</name>`, stepping back out to the parent depth first so the
    /// closing tag lines up with its opening tag.
    pub fn close_tag(&mut self, name: &str) -> Result<(), WriteError> {
        self.indent.decrement()?;
        writeln!(self.sink, "{}</{}>", self.indent.current(), name)?;
        Ok(())
    }

    /// Writes an indent-prefixed line with no tag wrapping.
    pub fn raw_line(&mut self, text: &str) -> Result<(), WriteError> {
        writeln!(self.sink, "{}{}", self.indent.current(), text)?;
        Ok(())
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    fn write_tag_start(
        &mut self,
        name: &str,
        attributes: &[(&str, Option<String>)],
    ) -> Result<(), WriteError> {
        write!(self.sink, "{}<{}", self.indent.current(), name)?;
        for (key, value) in attributes {
            if let Some(value) = value {
                write!(self.sink, " {}=\"{}\"", key, escape_xml(value))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(writer: TagWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_sink()).unwrap()
    }

    #[test]
    fn open_tag_writes_present_attributes_in_order() {
        let mut writer = TagWriter::new(Vec::new());
        writer
            .open_tag(
                "site",
                &[
                    ("handle", Some("local".to_string())),
                    ("arch", Some("x86_64".to_string())),
                    ("osrelease", None),
                ],
            )
            .unwrap();
        assert_eq!(writer.depth(), 1);
        assert_eq!(written(writer), "<site handle=\"local\" arch=\"x86_64\">\n");
    }

    #[test]
    fn absent_attribute_is_omitted_not_empty() {
        let mut writer = TagWriter::new(Vec::new());
        writer
            .open_tag("site", &[("handle", Some("local".to_string())), ("glibc", None)])
            .unwrap();
        let output = written(writer);
        assert!(!output.contains("glibc"));
    }

    #[test]
    fn close_tag_indents_at_the_parent_depth() {
        let mut writer = TagWriter::new(Vec::new());
        writer.open_tag("site", &[]).unwrap();
        writer.open_tag("directory", &[]).unwrap();
        writer.close_tag("directory").unwrap();
        writer.close_tag("site").unwrap();
        assert_eq!(
            written(writer),
            "<site>\n\t<directory>\n\t</directory>\n</site>\n"
        );
    }

    #[test]
    fn close_tag_without_open_underflows() {
        let mut writer = TagWriter::new(Vec::new());
        let err = writer.close_tag("site").unwrap_err();
        assert!(matches!(err, WriteError::IndentUnderflow));
    }

    #[test]
    fn empty_tag_leaves_depth_alone() {
        let mut writer = TagWriter::new(Vec::new());
        writer
            .empty_tag("grid", &[("type", Some("gt5".to_string()))])
            .unwrap();
        assert_eq!(writer.depth(), 0);
        assert_eq!(written(writer), "<grid type=\"gt5\"/>\n");
    }

    #[test]
    fn text_tag_is_a_single_line() {
        let mut writer = TagWriter::new(Vec::new());
        writer
            .text_tag("connection", &[("key", Some("gridftp".to_string()))], "on")
            .unwrap();
        assert_eq!(
            written(writer),
            "<connection key=\"gridftp\">on</connection>\n"
        );
    }

    #[test]
    fn attribute_values_and_text_are_escaped() {
        let mut writer = TagWriter::new(Vec::new());
        writer
            .text_tag(
                "connection",
                &[("key", Some("a<b&\"c\">".to_string()))],
                "x & y < z",
            )
            .unwrap();
        assert_eq!(
            written(writer),
            "<connection key=\"a&lt;b&amp;&quot;c&quot;&gt;\">x &amp; y &lt; z</connection>\n"
        );
    }

    #[test]
    fn raw_line_carries_the_indent_prefix() {
        let mut writer = TagWriter::new(Vec::new());
        writer.open_tag("site", &[]).unwrap();
        writer.raw_line("free text").unwrap();
        assert_eq!(written(writer), "<site>\n\tfree text\n");
    }

    #[test]
    fn escape_borrows_when_clean() {
        assert!(matches!(escape_xml("plain value"), Cow::Borrowed(_)));
        assert_eq!(escape_xml("5 > 3"), "5 &gt; 3");
    }
}
