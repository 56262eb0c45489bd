//! # TTML 生成器 - Head 处理模块
//!
//! 该模块负责写出根元素 `<tt>` 的开始标签以及 `<head>` 部分：
//! 内嵌图像的元数据、广播规范的样式表和具名区域的布局。

use base64::{Engine as _, engine::general_purpose::STANDARD};
use timed_text_core::{Cue, GeneratorError};

use super::{
    RenderContext,
    constants::{
        ATTR_BACKGROUND_COLOR, ATTR_COLOR, ATTR_EXTENT, ATTR_ORIGIN, ATTR_OVERFLOW, ATTR_XML_ID,
        ATTR_XML_LANG, BROADCAST_ROOT_ATTRS, DEFAULT_STYLE_ATTRS, DEFAULT_STYLE_ID, NS_SMPTE,
        NS_TT, NS_TTS, TAG_HEAD, TAG_IMAGE, TAG_LAYOUT, TAG_METADATA, TAG_REGION, TAG_STYLE,
        TAG_STYLING, TAG_TT,
    },
    utils::format_size_pair,
    writer::{Attributes, DocumentWriter},
};

/// 写入 `<tt>` 开始标签。属性顺序是输出格式的一部分。
pub(super) fn write_root_start(
    writer: &mut DocumentWriter,
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    let mut attrs = Attributes::new()
        .with("xmlns", NS_TT)
        .with("xmlns:tts", NS_TTS)
        .with(ATTR_XML_LANG, ctx.language);

    if ctx.profile.broadcast {
        attrs.extend_static(&BROADCAST_ROOT_ATTRS);
    }

    if ctx.profile.has_images() {
        attrs.push("xmlns:smpte", NS_SMPTE);
    }

    writer.open_line(0, TAG_TT, &attrs)
}

pub(super) fn write_ttml_head(
    writer: &mut DocumentWriter,
    cues: &[Cue],
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    writer.open_line(1, TAG_HEAD, &Attributes::new())?;
    write_metadata(writer, cues, ctx)?;
    write_styling(writer, ctx)?;
    write_layout(writer, ctx)?;
    writer.close_line(1, TAG_HEAD)
}

/// 每条图像提示对应一个 `<smpte:image>`，内容为 Base64 编码的 PNG 数据。
fn write_metadata(
    writer: &mut DocumentWriter,
    cues: &[Cue],
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    if !ctx.profile.has_images() {
        return writer.empty_line(2, TAG_METADATA, &Attributes::new());
    }

    writer.open_line(2, TAG_METADATA, &Attributes::new())?;
    for (cue, image_id) in ctx.profile.images(cues) {
        let data = cue.body.image_data().unwrap_or_default();
        let attrs = Attributes::new()
            .with("imageType", "PNG")
            .with("encoding", "Base64")
            .with(ATTR_XML_ID, image_id);
        writer.text_line(3, TAG_IMAGE, &attrs, &STANDARD.encode(data))?;
    }
    writer.close_line(2, TAG_METADATA)
}

fn write_styling(writer: &mut DocumentWriter, ctx: &RenderContext<'_>) -> Result<(), GeneratorError> {
    if !ctx.profile.broadcast {
        return writer.empty_line(2, TAG_STYLING, &Attributes::new());
    }

    writer.open_line(2, TAG_STYLING, &Attributes::new())?;

    let mut default_attrs = Attributes::new().with(ATTR_XML_ID, DEFAULT_STYLE_ID);
    default_attrs.extend_static(&DEFAULT_STYLE_ATTRS);
    writer.empty_line(3, TAG_STYLE, &default_attrs)?;

    for entry in ctx.profile.styles.entries() {
        let mut attrs = Attributes::new().with(ATTR_XML_ID, entry.name.as_str());
        if let Some(background) = &entry.background_color {
            attrs.push(ATTR_BACKGROUND_COLOR, background.as_str());
        }
        if let Some(color) = &entry.color {
            attrs.push(ATTR_COLOR, color.as_str());
        }
        writer.empty_line(3, TAG_STYLE, &attrs)?;
    }

    writer.close_line(2, TAG_STYLING)
}

/// 区域表中的每个条目都在头部声明，按键的字典序输出。
fn write_layout(writer: &mut DocumentWriter, ctx: &RenderContext<'_>) -> Result<(), GeneratorError> {
    if ctx.regions.is_empty() {
        return writer.empty_line(2, TAG_LAYOUT, &Attributes::new());
    }

    writer.open_line(2, TAG_LAYOUT, &Attributes::new())?;
    for (key, region) in ctx.regions {
        let mut attrs = Attributes::new()
            .with(ATTR_XML_ID, key.as_str())
            .with(
                ATTR_ORIGIN,
                format_size_pair(region.window_anchor_x, region.window_anchor_y),
            )
            .with(ATTR_EXTENT, format_size_pair(region.width, region.height));
        if !ctx.profile.broadcast {
            attrs.push(ATTR_OVERFLOW, "visible");
        }
        writer.empty_line(3, TAG_REGION, &attrs)?;
    }
    writer.close_line(2, TAG_LAYOUT)
}
