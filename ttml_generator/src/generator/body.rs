//! # TTML 生成器 - Body 处理模块
//!
//! 该模块负责生成 `<body>` 部分：每条提示一个 `<p>`，按添加顺序写入同一个 `<div>`。
//! 需要自动生成的区域紧挨着写在对应的 `<p>` 之前。

use std::collections::HashMap;

use timed_text_core::{
    Cue, GeneratorError, TextAlignment, TextNumber, TextSettings, WritingDirection,
};
use tracing::{debug, warn};

use super::{
    RenderContext,
    constants::{
        ATTR_BACKGROUND_IMAGE, ATTR_BEGIN, ATTR_END, ATTR_EXTENT, ATTR_ORIGIN, ATTR_REGION,
        ATTR_STYLE, ATTR_TEXT_ALIGN, ATTR_WRITING_MODE, ATTR_XML_ID, ATTR_XML_SPACE,
        AUTO_REGION_PREFIX, DEFAULT_STYLE_ID, TAG_BODY, TAG_DIV, TAG_REGION,
        TELETEXT_REGION_PREFIX,
    },
    fragment::write_paragraph,
    utils::{format_size_pair, format_ttml_time, ticks_to_ms},
    writer::{Attributes, DocumentWriter},
};

const DIV_DEPTH: usize = 2;
const CUE_DEPTH: usize = 3;

/// 单次输出内的区域计数状态，每次生成文档都从零开始。
#[derive(Debug, Default)]
struct RegionState {
    next_auto_id: usize,
    /// 每个行号下已声明的图文电视区域：(origin, extent, id)。
    declared_teletext: HashMap<String, Vec<(String, String, String)>>,
}

impl RegionState {
    /// 返回要引用的区域标识，以及是否需要在此处声明该区域。
    ///
    /// 同一行号下几何相同的提示共用一个区域；几何不同时依次编号为 `ttx_<line>_<n>`。
    fn teletext_id(&mut self, base: String, origin: &str, extent: &str) -> (String, bool) {
        let declared = self.declared_teletext.entry(base.clone()).or_default();
        if let Some((_, _, id)) = declared
            .iter()
            .find(|(o, e, _)| o == origin && e == extent)
        {
            return (id.clone(), false);
        }

        let id = if declared.is_empty() {
            base
        } else {
            let id = format!("{base}_{}", declared.len());
            debug!(region = %id, origin, extent, "同一行号的几何不同，声明新的区域");
            id
        };
        declared.push((origin.to_string(), extent.to_string(), id.clone()));
        (id, true)
    }
}

/// 写入 TTML 的 `<body>` 部分，包含所有提示。
pub(super) fn write_ttml_body(
    writer: &mut DocumentWriter,
    cues: &[Cue],
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    let mut body_attrs = Attributes::new();
    if ctx.profile.broadcast {
        body_attrs.push(ATTR_STYLE, DEFAULT_STYLE_ID);
    }
    writer.open_line(1, TAG_BODY, &body_attrs)?;

    if cues.is_empty() {
        writer.empty_line(DIV_DEPTH, TAG_DIV, &Attributes::new())?;
    } else {
        writer.open_line(DIV_DEPTH, TAG_DIV, &Attributes::new())?;
        let mut regions = RegionState::default();
        for (index, cue) in cues.iter().enumerate() {
            write_cue(writer, cue, ctx.profile.image_id(index), ctx, &mut regions)?;
        }
        writer.close_line(DIV_DEPTH, TAG_DIV)?;
    }

    writer.close_line(1, TAG_BODY)
}

fn write_cue(
    writer: &mut DocumentWriter,
    cue: &Cue,
    image_id: Option<&str>,
    ctx: &RenderContext<'_>,
    regions: &mut RegionState,
) -> Result<(), GeneratorError> {
    let region_id = resolve_region(writer, &cue.settings, ctx, regions)?;

    let mut attrs = Attributes::new();
    if !ctx.profile.broadcast {
        attrs.push(ATTR_XML_SPACE, "preserve");
    }
    attrs.push(
        ATTR_BEGIN,
        format_ttml_time(ticks_to_ms(cue.start, ctx.time_scale)),
    );
    attrs.push(
        ATTR_END,
        format_ttml_time(ticks_to_ms(cue.end, ctx.time_scale)),
    );
    if let Some(image_id) = image_id {
        attrs.push(ATTR_BACKGROUND_IMAGE, format!("#{image_id}"));
    }
    if !cue.id.is_empty() {
        attrs.push(ATTR_XML_ID, cue.id.as_str());
    }
    if let Some(region_id) = region_id {
        attrs.push(ATTR_REGION, region_id);
    }
    if let Some(mode) = writing_mode(cue.settings.writing_direction) {
        attrs.push(ATTR_WRITING_MODE, mode);
    }
    if let Some(align) = text_align(cue.settings.text_alignment) {
        attrs.push(ATTR_TEXT_ALIGN, align);
    }

    write_paragraph(writer, CUE_DEPTH, &attrs, cue, ctx)
}

/// 决定 `<p>` 的 `region` 属性。
///
/// 区域表中存在的键优先，即使同时给出了几何字段也不会再生成区域。
/// 否则只要有任一几何字段，就在 `<p>` 之前写出一个自动生成的区域。
fn resolve_region(
    writer: &mut DocumentWriter,
    settings: &TextSettings,
    ctx: &RenderContext<'_>,
    regions: &mut RegionState,
) -> Result<Option<String>, GeneratorError> {
    match settings.region.as_deref() {
        Some(key) if ctx.regions.contains_key(key) => return Ok(Some(key.to_string())),
        Some(key) if !settings.has_geometry() => {
            warn!(region = key, "提示引用了未声明的区域，已忽略");
            return Ok(None);
        }
        None if !settings.has_geometry() => return Ok(None),
        _ => {}
    }

    let origin = format_size_pair(
        settings.position.unwrap_or(TextNumber::pixels(0.0)),
        settings.line.unwrap_or(TextNumber::pixels(0.0)),
    );
    let extent = format_size_pair(
        settings.width.unwrap_or(TextNumber::percent(100.0)),
        settings.height.unwrap_or(TextNumber::percent(100.0)),
    );

    let id = if ctx.profile.broadcast {
        let line = settings.line.map_or(0.0, |line| line.value);
        let (id, declare) =
            regions.teletext_id(format!("{TELETEXT_REGION_PREFIX}{line}"), &origin, &extent);
        if !declare {
            return Ok(Some(id));
        }
        id
    } else {
        let id = format!("{AUTO_REGION_PREFIX}{}", regions.next_auto_id);
        regions.next_auto_id += 1;
        id
    };

    let attrs = Attributes::new()
        .with(ATTR_XML_ID, id.as_str())
        .with(ATTR_ORIGIN, origin)
        .with(ATTR_EXTENT, extent);
    writer.empty_line(CUE_DEPTH, TAG_REGION, &attrs)?;

    Ok(Some(id))
}

const fn writing_mode(direction: WritingDirection) -> Option<&'static str> {
    match direction {
        WritingDirection::Horizontal => None,
        WritingDirection::VerticalGrowingRight => Some("tblr"),
        WritingDirection::VerticalGrowingLeft => Some("tbrl"),
    }
}

const fn text_align(alignment: TextAlignment) -> Option<&'static str> {
    match alignment {
        TextAlignment::Start => None,
        TextAlignment::Center => Some("center"),
        TextAlignment::End => Some("end"),
    }
}
