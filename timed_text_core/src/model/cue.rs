//! 单条字幕提示及其布局设置。

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::{fragment::TextFragment, region::TextNumber};

/// 文本对齐方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    /// 默认值，输出时省略。
    #[default]
    Start,
    Center,
    End,
}

/// 书写方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WritingDirection {
    /// 默认值，输出时省略。
    #[default]
    Horizontal,
    /// 竖排，列从左向右推进。
    VerticalGrowingRight,
    /// 竖排，列从右向左推进。
    VerticalGrowingLeft,
}

/// 每条提示的布局与行为设置。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct TextSettings {
    /// 引用的区域键。
    #[builder(setter(into, strip_option))]
    pub region: Option<String>,
    /// 水平锚点。
    #[builder(setter(into, strip_option))]
    pub position: Option<TextNumber>,
    /// 垂直锚点。
    #[builder(setter(into, strip_option))]
    pub line: Option<TextNumber>,
    #[builder(setter(into, strip_option))]
    pub width: Option<TextNumber>,
    #[builder(setter(into, strip_option))]
    pub height: Option<TextNumber>,
    pub text_alignment: TextAlignment,
    pub writing_direction: WritingDirection,
}

impl TextSettings {
    /// 是否直接给出了任意几何字段。
    #[must_use]
    pub const fn has_geometry(&self) -> bool {
        self.position.is_some()
            || self.line.is_some()
            || self.width.is_some()
            || self.height.is_some()
    }
}

/// 一条带时间范围的字幕提示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// 不透明标识符，为空时不输出。
    pub id: String,
    /// 起始时间（以时间刻度计的 tick）。
    pub start: u64,
    /// 结束时间，不小于 `start`。
    pub end: u64,
    pub settings: TextSettings,
    pub body: TextFragment,
}

impl Cue {
    /// 创建一条提示。
    ///
    /// # Panics
    ///
    /// 当 `end < start` 时 panic。这是调用方的编程错误。
    pub fn new(
        id: impl Into<String>,
        start: u64,
        end: u64,
        settings: TextSettings,
        body: TextFragment,
    ) -> Self {
        assert!(
            end >= start,
            "提示结束时间 {end} 早于开始时间 {start}"
        );
        Self {
            id: id.into(),
            start,
            end,
            settings,
            body,
        }
    }

    /// 是否为图像提示。
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.body.image_data().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_builder() {
        let settings = TextSettingsBuilder::default()
            .region("bottom")
            .line(TextNumber::lines(9.0))
            .text_alignment(TextAlignment::End)
            .build()
            .unwrap();
        assert_eq!(settings.region.as_deref(), Some("bottom"));
        assert!(settings.has_geometry());
        assert_eq!(settings.writing_direction, WritingDirection::Horizontal);
        assert!(!TextSettings::default().has_geometry());
    }

    #[test]
    #[should_panic(expected = "早于开始时间")]
    fn test_cue_rejects_reversed_range() {
        let _ = Cue::new("", 10, 5, TextSettings::default(), TextFragment::plain("x"));
    }

    #[test]
    fn test_image_cue() {
        let cue = Cue::new("", 0, 1, TextSettings::default(), TextFragment::image(vec![1]));
        assert!(cue.is_image());
    }
}
