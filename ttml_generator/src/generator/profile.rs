//! # TTML 生成器 - 文档预扫描模块
//!
//! 渲染前对所有提示做一次扫描：决定整篇文档是否使用广播规范，
//! 为图像提示分配 `img_<n>` 标识，并收集广播规范需要的颜色样式表。

use timed_text_core::{Cue, FragmentContent, FragmentStyle, GeneratorError};
use tracing::warn;

use super::constants::IMAGE_ID_PREFIX;

/// 一条去重后的颜色样式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct StyleEntry {
    pub(super) name: String,
    pub(super) color: Option<String>,
    pub(super) background_color: Option<String>,
}

/// 按首次出现顺序保存的 (前景色, 背景色) 样式表。
#[derive(Debug, Default)]
pub(super) struct StyleTable {
    entries: Vec<StyleEntry>,
}

impl StyleTable {
    fn insert(&mut self, style: &FragmentStyle) {
        if !style.has_color() || self.lookup(style).is_some() {
            return;
        }
        let color = style.color();
        let background_color = style.background_color();
        self.entries.push(StyleEntry {
            name: format!(
                "{}_{}",
                color.unwrap_or_default(),
                background_color.unwrap_or_default()
            ),
            color: color.map(str::to_string),
            background_color: background_color.map(str::to_string),
        });
    }

    /// 查找片段颜色对应的样式名。
    pub(super) fn lookup(&self, style: &FragmentStyle) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| {
                entry.color.as_deref() == style.color()
                    && entry.background_color.as_deref() == style.background_color()
            })
            .map(|entry| entry.name.as_str())
    }

    pub(super) fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }
}

/// 预扫描的结果，渲染阶段只读。
#[derive(Debug)]
pub(super) struct DocumentProfile {
    /// 是否启用广播规范（任一片段带颜色）。
    pub(super) broadcast: bool,
    /// 与提示一一对应的图像标识。
    image_ids: Vec<Option<String>>,
    pub(super) styles: StyleTable,
}

impl DocumentProfile {
    pub(super) fn scan(cues: &[Cue]) -> Result<Self, GeneratorError> {
        let broadcast = cues.iter().any(|cue| cue.body.has_color());

        let mut image_count = 0usize;
        let mut image_ids = Vec::with_capacity(cues.len());
        let mut styles = StyleTable::default();

        for (index, cue) in cues.iter().enumerate() {
            if let Some(depth) = nested_image_depth(cue) {
                warn!(cue = index, id = %cue.id, depth, "图像只允许出现在提示的根片段上");
                return Err(GeneratorError::InvalidFragment(format!(
                    "第 {index} 条提示的图像位于嵌套片段中"
                )));
            }

            image_ids.push(cue.is_image().then(|| {
                image_count += 1;
                format!("{IMAGE_ID_PREFIX}{image_count}")
            }));

            if broadcast {
                cue.body.walk(&mut |fragment| styles.insert(&fragment.style));
            }
        }

        Ok(Self {
            broadcast,
            image_ids,
            styles,
        })
    }

    /// 第 `index` 条提示的图像标识。
    pub(super) fn image_id(&self, index: usize) -> Option<&str> {
        self.image_ids.get(index).and_then(Option::as_deref)
    }

    pub(super) fn has_images(&self) -> bool {
        self.image_ids.iter().any(Option::is_some)
    }

    /// 按出现顺序遍历 (提示, 图像标识)。
    pub(super) fn images<'a>(&'a self, cues: &'a [Cue]) -> impl Iterator<Item = (&'a Cue, &'a str)> {
        cues.iter()
            .zip(&self.image_ids)
            .filter_map(|(cue, id)| id.as_deref().map(|id| (cue, id)))
    }
}

/// 若根片段以下出现图像，返回其所在深度。
fn nested_image_depth(cue: &Cue) -> Option<usize> {
    fn search(fragments: &[timed_text_core::TextFragment], depth: usize) -> Option<usize> {
        fragments.iter().find_map(|fragment| match &fragment.content {
            FragmentContent::Image(_) => Some(depth),
            FragmentContent::Fragments(children) => search(children, depth + 1),
            FragmentContent::Text(_) | FragmentContent::LineBreak => None,
        })
    }
    search(cue.body.children(), 1)
}
