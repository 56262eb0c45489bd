//! # TTML 生成器 - 输出写入模块
//!
//! 在 `quick_xml::Writer` 之上按固定的两空格缩进写出元素。属性值与文本都在这里统一转义，
//! 因此调用方传入的总是原始字符串。

use std::borrow::Cow;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use timed_text_core::GeneratorError;

use crate::utils::escape_xml;

const INDENT: &str = "  ";

/// 按写入顺序保存的元素属性。
#[derive(Debug, Default)]
pub(super) struct Attributes<'a>(Vec<(&'a str, Cow<'a, str>)>);

impl<'a> Attributes<'a> {
    pub(super) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(super) fn with(mut self, key: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.push(key, value);
        self
    }

    pub(super) fn push(&mut self, key: &'a str, value: impl Into<Cow<'a, str>>) {
        self.0.push((key, value.into()));
    }

    pub(super) fn extend_static(&mut self, attrs: &[(&'a str, &'a str)]) {
        for &(key, value) in attrs {
            self.push(key, value);
        }
    }
}

pub(super) struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    pub(super) fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    pub(super) fn into_string(self) -> Result<String, GeneratorError> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }

    /// `<?xml version="1.0" encoding="UTF-8"?>`
    pub(super) fn declaration(&mut self) -> Result<(), GeneratorError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.newline()
    }

    pub(super) fn indent(&mut self, depth: usize) -> Result<(), GeneratorError> {
        if depth > 0 {
            self.raw(&INDENT.repeat(depth))?;
        }
        Ok(())
    }

    pub(super) fn newline(&mut self) -> Result<(), GeneratorError> {
        self.raw("\n")
    }

    fn raw(&mut self, whitespace: &str) -> Result<(), GeneratorError> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(whitespace)))?;
        Ok(())
    }

    pub(super) fn start(&mut self, name: &str, attrs: &Attributes<'_>) -> Result<(), GeneratorError> {
        self.writer.write_event(Event::Start(element(name, attrs)))?;
        Ok(())
    }

    pub(super) fn end(&mut self, name: &str) -> Result<(), GeneratorError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(super) fn empty(&mut self, name: &str, attrs: &Attributes<'_>) -> Result<(), GeneratorError> {
        self.writer.write_event(Event::Empty(element(name, attrs)))?;
        Ok(())
    }

    /// 写入转义后的文本节点。
    pub(super) fn text(&mut self, text: &str) -> Result<(), GeneratorError> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escape_xml(text))))?;
        Ok(())
    }

    /// 独占一行的开始标签。
    pub(super) fn open_line(
        &mut self,
        depth: usize,
        name: &str,
        attrs: &Attributes<'_>,
    ) -> Result<(), GeneratorError> {
        self.indent(depth)?;
        self.start(name, attrs)?;
        self.newline()
    }

    /// 独占一行的结束标签。
    pub(super) fn close_line(&mut self, depth: usize, name: &str) -> Result<(), GeneratorError> {
        self.indent(depth)?;
        self.end(name)?;
        self.newline()
    }

    /// 独占一行的自闭合元素。
    pub(super) fn empty_line(
        &mut self,
        depth: usize,
        name: &str,
        attrs: &Attributes<'_>,
    ) -> Result<(), GeneratorError> {
        self.indent(depth)?;
        self.empty(name, attrs)?;
        self.newline()
    }

    /// 独占一行、只含文本的元素。文本为空时写成自闭合元素。
    pub(super) fn text_line(
        &mut self,
        depth: usize,
        name: &str,
        attrs: &Attributes<'_>,
        text: &str,
    ) -> Result<(), GeneratorError> {
        if text.is_empty() {
            return self.empty_line(depth, name, attrs);
        }
        self.indent(depth)?;
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)?;
        self.newline()
    }
}

fn element<'a>(name: &'a str, attrs: &Attributes<'_>) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in &attrs.0 {
        let escaped = escape_xml(value);
        start.push_attribute((key.as_bytes(), escaped.as_bytes()));
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_values_are_escaped_once() {
        let mut writer = DocumentWriter::new();
        let attrs = Attributes::new()
            .with("xml:id", "<a&\"")
            .with("region", String::from("r"));
        writer.empty_line(1, "region", &attrs).unwrap();
        assert_eq!(
            writer.into_string().unwrap(),
            "  <region xml:id=\"&lt;a&amp;&quot;\" region=\"r\"/>\n"
        );
    }

    #[test]
    fn test_text_line() {
        let mut writer = DocumentWriter::new();
        writer
            .text_line(2, "span", &Attributes::new(), "a<b")
            .unwrap();
        writer.text_line(2, "span", &Attributes::new(), "").unwrap();
        assert_eq!(
            writer.into_string().unwrap(),
            "    <span>a&lt;b</span>\n    <span/>\n"
        );
    }

    #[test]
    fn test_declaration() {
        let mut writer = DocumentWriter::new();
        writer.declaration().unwrap();
        assert_eq!(
            writer.into_string().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        );
    }
}
