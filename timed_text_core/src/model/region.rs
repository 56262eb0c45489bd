//! 尺寸数值与布局区域。

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// 尺寸单位。字符串形式即输出时的后缀。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
pub enum TextUnit {
    /// 百分比
    #[default]
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
    /// 像素
    #[strum(serialize = "px")]
    #[serde(rename = "px")]
    Pixels,
    /// 行（字符单元高度）
    #[strum(serialize = "em")]
    #[serde(rename = "em")]
    Lines,
}

/// 带单位的尺寸数值。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextNumber {
    pub value: f64,
    pub unit: TextUnit,
}

impl TextNumber {
    #[must_use]
    pub const fn new(value: f64, unit: TextUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::new(value, TextUnit::Percent)
    }

    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self::new(value, TextUnit::Pixels)
    }

    #[must_use]
    pub const fn lines(value: f64) -> Self {
        Self::new(value, TextUnit::Lines)
    }
}

/// 输出为 `30%`、`100px`、`4em` 这样的形式。整数值不带小数部分。
impl fmt::Display for TextNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_ref())
    }
}

/// 一个具名的矩形布局区域。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRegion {
    pub width: TextNumber,
    pub height: TextNumber,
    pub window_anchor_x: TextNumber,
    pub window_anchor_y: TextNumber,
}

impl Default for TextRegion {
    fn default() -> Self {
        Self {
            width: TextNumber::percent(100.0),
            height: TextNumber::percent(100.0),
            window_anchor_x: TextNumber::percent(0.0),
            window_anchor_y: TextNumber::percent(0.0),
        }
    }
}

/// 区域表。按键的字典序遍历，保证头部输出顺序稳定。
pub type RegionTable = BTreeMap<String, TextRegion>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(TextNumber::percent(30.0).to_string(), "30%");
        assert_eq!(TextNumber::pixels(100.0).to_string(), "100px");
        assert_eq!(TextNumber::lines(4.0).to_string(), "4em");
        assert_eq!(TextNumber::percent(12.5).to_string(), "12.5%");
    }

    #[test]
    fn test_unit_from_suffix() {
        assert_eq!("px".parse::<TextUnit>(), Ok(TextUnit::Pixels));
        assert_eq!("em".parse::<TextUnit>(), Ok(TextUnit::Lines));
        assert_eq!("%".parse::<TextUnit>(), Ok(TextUnit::Percent));
        assert!("pt".parse::<TextUnit>().is_err());
    }

    #[test]
    fn test_default_region_covers_viewport() {
        let region = TextRegion::default();
        assert_eq!(region.window_anchor_x.to_string(), "0%");
        assert_eq!(region.height.to_string(), "100%");
    }
}
