use std::borrow::Cow;

/// 转义 XML 属性值和文本节点中的 `&`、`<`、`>`、`"`。
///
/// 其他字符（包括 `'`）保持原样。不含特殊字符时不分配内存。
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_xml("<a&\""), "&lt;a&amp;&quot;");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_escape_treats_input_as_literal_text() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(escape_xml("a > b & c"), "a &gt; b &amp; c");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("it's fine"), Cow::Borrowed("it's fine")));
        assert_eq!(escape_xml(""), "");
    }
}
