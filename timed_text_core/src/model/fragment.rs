//! 提示正文的样式文本树。

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// 单个文本片段上的样式。所有字段均为可选，未设置表示继承。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct FragmentStyle {
    /// 粗体。`Some(false)` 会显式输出为常规字重。
    #[builder(setter(into, strip_option))]
    pub bold: Option<bool>,
    /// 斜体。
    #[builder(setter(into, strip_option))]
    pub italic: Option<bool>,
    /// 下划线。
    #[builder(setter(into, strip_option))]
    pub underline: Option<bool>,
    /// 前景色，例如 `red` 或 `#ff0000`。
    #[builder(setter(into, strip_option))]
    pub color: Option<String>,
    /// 背景色。
    #[builder(setter(into, strip_option))]
    pub background_color: Option<String>,
}

impl FragmentStyle {
    /// 是否设置了任何样式字段。空字符串的颜色不计入。
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.bold.is_some() || self.italic.is_some() || self.underline.is_some() || self.has_color()
    }

    /// 是否设置了非空的前景色或背景色。
    #[must_use]
    pub fn has_color(&self) -> bool {
        non_empty(self.color.as_deref()).is_some()
            || non_empty(self.background_color.as_deref()).is_some()
    }

    /// 返回非空的前景色。
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        non_empty(self.color.as_deref())
    }

    /// 返回非空的背景色。
    #[must_use]
    pub fn background_color(&self) -> Option<&str> {
        non_empty(self.background_color.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// 片段承载的内容，四种形态互斥。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentContent {
    /// 一段文字。
    Text(String),
    /// 换行标记。
    LineBreak,
    /// 嵌套的子片段序列。
    Fragments(Vec<TextFragment>),
    /// 原始 PNG 图像字节。只允许出现在提示的根片段上。
    Image(Vec<u8>),
}

/// 一个带样式的文本片段，也用作提示的正文根节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    /// 片段样式。
    pub style: FragmentStyle,
    /// 片段内容。
    pub content: FragmentContent,
}

impl Default for TextFragment {
    fn default() -> Self {
        Self::plain("")
    }
}

impl TextFragment {
    /// 创建带样式的文字片段。
    pub fn text(style: FragmentStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            content: FragmentContent::Text(text.into()),
        }
    }

    /// 创建无样式的文字片段。
    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(FragmentStyle::default(), text)
    }

    /// 创建换行片段。
    #[must_use]
    pub fn line_break() -> Self {
        Self {
            style: FragmentStyle::default(),
            content: FragmentContent::LineBreak,
        }
    }

    /// 创建包含子片段的复合片段。
    #[must_use]
    pub fn fragments(style: FragmentStyle, fragments: Vec<TextFragment>) -> Self {
        Self {
            style,
            content: FragmentContent::Fragments(fragments),
        }
    }

    /// 创建图像正文。
    pub fn image(data: impl Into<Vec<u8>>) -> Self {
        Self {
            style: FragmentStyle::default(),
            content: FragmentContent::Image(data.into()),
        }
    }

    /// 若内容是图像，返回原始字节。
    #[must_use]
    pub fn image_data(&self) -> Option<&[u8]> {
        match &self.content {
            FragmentContent::Image(data) => Some(data),
            _ => None,
        }
    }

    /// 子片段；非复合片段返回空切片。
    #[must_use]
    pub fn children(&self) -> &[TextFragment] {
        match &self.content {
            FragmentContent::Fragments(children) => children,
            _ => &[],
        }
    }

    /// 该片段或其任意后代是否带有样式。
    #[must_use]
    pub fn has_style(&self) -> bool {
        self.style.is_styled() || self.children().iter().any(Self::has_style)
    }

    /// 该片段或其任意后代是否带有颜色。
    #[must_use]
    pub fn has_color(&self) -> bool {
        self.style.has_color() || self.children().iter().any(Self::has_color)
    }

    /// 按先序遍历访问该片段及其所有后代。
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a TextFragment)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> FragmentStyle {
        FragmentStyleBuilder::default().bold(true).build().unwrap()
    }

    #[test]
    fn test_has_style_looks_into_children() {
        let nested = TextFragment::fragments(
            FragmentStyle::default(),
            vec![
                TextFragment::plain("a"),
                TextFragment::fragments(
                    FragmentStyle::default(),
                    vec![TextFragment::text(bold(), "b")],
                ),
            ],
        );
        assert!(nested.has_style());
        assert!(!nested.has_color());
        assert!(!TextFragment::plain("a").has_style());
    }

    #[test]
    fn test_empty_color_is_not_a_style() {
        let style = FragmentStyle {
            color: Some(String::new()),
            ..Default::default()
        };
        assert!(!style.is_styled());
        assert!(!style.has_color());
        assert_eq!(style.color(), None);

        let style = FragmentStyleBuilder::default()
            .background_color("cyan")
            .build()
            .unwrap();
        assert!(style.has_color());
        assert_eq!(style.background_color(), Some("cyan"));
    }

    #[test]
    fn test_walk_is_preorder() {
        let root = TextFragment::fragments(
            FragmentStyle::default(),
            vec![
                TextFragment::plain("a"),
                TextFragment::line_break(),
                TextFragment::plain("b"),
            ],
        );
        let mut seen = Vec::new();
        root.walk(&mut |f| seen.push(f.content.clone()));
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1], FragmentContent::Text("a".to_string()));
        assert_eq!(seen[2], FragmentContent::LineBreak);
    }

    #[test]
    fn test_image_data() {
        assert_eq!(
            TextFragment::image(vec![1, 2, 3]).image_data(),
            Some(&[1u8, 2, 3][..])
        );
        assert_eq!(TextFragment::plain("x").image_data(), None);
    }
}
