//! # TTML 生成器 - 片段渲染模块
//!
//! 把提示正文渲染为 `<p>` 的内容。没有任何样式时所有片段写在 `<p>` 同一行；
//! 只要有一个片段带样式，每个片段都单独占一行并包裹在 `<span>` 中。

use timed_text_core::{Cue, FragmentContent, FragmentStyle, GeneratorError, TextFragment};

use super::{
    RenderContext,
    constants::{ATTR_FONT_STYLE, ATTR_FONT_WEIGHT, ATTR_STYLE, ATTR_TEXT_DECORATION, TAG_BR, TAG_P, TAG_SPAN},
    writer::{Attributes, DocumentWriter},
};

pub(super) fn write_paragraph(
    writer: &mut DocumentWriter,
    depth: usize,
    attrs: &Attributes<'_>,
    cue: &Cue,
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    let body = &cue.body;

    if body.image_data().is_some() || !has_inline_content(body) {
        return writer.empty_line(depth, TAG_P, attrs);
    }

    if body.has_style() {
        writer.open_line(depth, TAG_P, attrs)?;
        write_block(writer, body, depth + 1, true, ctx)?;
        return writer.close_line(depth, TAG_P);
    }

    writer.indent(depth)?;
    writer.start(TAG_P, attrs)?;
    write_inline(writer, body)?;
    writer.end(TAG_P)?;
    writer.newline()
}

/// 正文是否会产生任何输出。
fn has_inline_content(fragment: &TextFragment) -> bool {
    match &fragment.content {
        FragmentContent::Text(text) => !text.is_empty() || fragment.style.is_styled(),
        FragmentContent::LineBreak => true,
        FragmentContent::Fragments(children) => {
            fragment.style.is_styled() || children.iter().any(has_inline_content)
        }
        FragmentContent::Image(_) => false,
    }
}

/// 无样式正文：文本与 `<br/>` 连续写在一行，嵌套片段按顺序展开。
fn write_inline(writer: &mut DocumentWriter, fragment: &TextFragment) -> Result<(), GeneratorError> {
    match &fragment.content {
        FragmentContent::Text(text) => writer.text(text),
        FragmentContent::LineBreak => writer.empty(TAG_BR, &Attributes::new()),
        FragmentContent::Fragments(children) => {
            for child in children {
                write_inline(writer, child)?;
            }
            Ok(())
        }
        FragmentContent::Image(_) => Err(unexpected_image()),
    }
}

/// 带样式正文：每个片段独占一行。根片段本身没有样式时不额外包裹 `<span>`。
fn write_block(
    writer: &mut DocumentWriter,
    fragment: &TextFragment,
    depth: usize,
    is_root: bool,
    ctx: &RenderContext<'_>,
) -> Result<(), GeneratorError> {
    match &fragment.content {
        FragmentContent::LineBreak => writer.empty_line(depth, TAG_BR, &Attributes::new()),
        FragmentContent::Text(text) => {
            writer.text_line(depth, TAG_SPAN, &span_attributes(&fragment.style, ctx), text)
        }
        FragmentContent::Fragments(children) if is_root && !fragment.style.is_styled() => {
            for child in children {
                write_block(writer, child, depth, false, ctx)?;
            }
            Ok(())
        }
        FragmentContent::Fragments(children) => {
            let attrs = span_attributes(&fragment.style, ctx);
            if children.is_empty() {
                return writer.empty_line(depth, TAG_SPAN, &attrs);
            }
            writer.open_line(depth, TAG_SPAN, &attrs)?;
            for child in children {
                write_block(writer, child, depth + 1, false, ctx)?;
            }
            writer.close_line(depth, TAG_SPAN)
        }
        FragmentContent::Image(_) => Err(unexpected_image()),
    }
}

/// 广播规范引用样式表中的颜色样式；字重、字形和装饰总是以内联属性写出。
fn span_attributes<'a>(style: &FragmentStyle, ctx: &RenderContext<'a>) -> Attributes<'a> {
    let mut attrs = Attributes::new();

    if ctx.profile.broadcast
        && let Some(name) = ctx.profile.styles.lookup(style)
    {
        attrs.push(ATTR_STYLE, name);
    }
    if let Some(bold) = style.bold {
        attrs.push(ATTR_FONT_WEIGHT, if bold { "bold" } else { "normal" });
    }
    if let Some(italic) = style.italic {
        attrs.push(ATTR_FONT_STYLE, if italic { "italic" } else { "normal" });
    }
    if let Some(underline) = style.underline {
        attrs.push(
            ATTR_TEXT_DECORATION,
            if underline { "underline" } else { "none" },
        );
    }

    attrs
}

fn unexpected_image() -> GeneratorError {
    GeneratorError::InvalidFragment("图像只能作为提示的根片段".to_string())
}
