//! 预览内容：纯文本或经 pulldown-cmark 渲染的 Markdown
//!
//! 输出与终端无关的带样式行，由前端映射到具体颜色。

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Plain,
    Markdown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub link: bool,
    pub muted: bool,
    /// Heading level 1..=6.
    pub heading: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSpan {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewLine {
    pub spans: Vec<PreviewSpan>,
}

impl PreviewLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        self.spans.push(PreviewSpan {
            text: text.into(),
            style,
        });
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

const TAB: &str = "    ";

pub fn render(content: &str, kind: PreviewKind) -> Vec<PreviewLine> {
    match kind {
        PreviewKind::Plain => plain_lines(content),
        PreviewKind::Markdown => render_markdown(content),
    }
}

pub fn plain_lines(content: &str) -> Vec<PreviewLine> {
    content
        .lines()
        .map(|line| {
            let mut out = PreviewLine::new();
            if !line.is_empty() {
                out.push(line.replace('\t', TAB), SpanStyle::default());
            }
            out
        })
        .collect()
}

pub fn render_markdown(content: &str) -> Vec<PreviewLine> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut lines: Vec<PreviewLine> = vec![PreviewLine::new()];
    let mut style_stack: Vec<SpanStyle> = vec![SpanStyle::default()];
    // One entry per open list: next number for ordered lists.
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    let current = |stack: &[SpanStyle]| stack.last().copied().unwrap_or_default();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Strong => {
                    let style = current(&style_stack);
                    style_stack.push(SpanStyle { bold: true, ..style });
                }
                Tag::Emphasis => {
                    let style = current(&style_stack);
                    style_stack.push(SpanStyle {
                        italic: true,
                        ..style
                    });
                }
                Tag::Strikethrough => {
                    let style = current(&style_stack);
                    style_stack.push(SpanStyle {
                        strikethrough: true,
                        ..style
                    });
                }
                Tag::Link { .. } => {
                    let style = current(&style_stack);
                    style_stack.push(SpanStyle {
                        link: true,
                        underline: true,
                        ..style
                    });
                }
                Tag::Heading { level, .. } => {
                    start_block(&mut lines);
                    let style = current(&style_stack);
                    style_stack.push(SpanStyle {
                        bold: true,
                        heading: Some(level as u8),
                        ..style
                    });
                }
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    start_block(&mut lines);
                    if let CodeBlockKind::Fenced(lang) = kind {
                        if !lang.is_empty() {
                            if let Some(line) = lines.last_mut() {
                                line.push(
                                    lang.to_string(),
                                    SpanStyle {
                                        muted: true,
                                        ..SpanStyle::default()
                                    },
                                );
                            }
                            lines.push(PreviewLine::new());
                        }
                    }
                }
                Tag::List(start) => {
                    if lists.is_empty() {
                        start_block(&mut lines);
                    }
                    lists.push(start);
                }
                Tag::Item => {
                    if !lines.last().is_some_and(PreviewLine::is_empty) {
                        lines.push(PreviewLine::new());
                    }
                    let indent = "  ".repeat(lists.len().saturating_sub(1));
                    let marker = match lists.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{indent}{n}. ");
                            *n += 1;
                            marker
                        }
                        _ => format!("{indent}• "),
                    };
                    if let Some(line) = lines.last_mut() {
                        line.push(
                            marker,
                            SpanStyle {
                                muted: true,
                                ..SpanStyle::default()
                            },
                        );
                    }
                }
                Tag::Paragraph => {
                    if lists.is_empty() {
                        start_block(&mut lines);
                    }
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link => {
                    style_stack.pop();
                }
                TagEnd::Heading(_) => {
                    style_stack.pop();
                    lines.push(PreviewLine::new());
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    if lines.last().is_some_and(PreviewLine::is_empty) {
                        lines.pop();
                    }
                    lines.push(PreviewLine::new());
                }
                TagEnd::List(_) => {
                    lists.pop();
                    if lists.is_empty() {
                        lines.push(PreviewLine::new());
                    }
                }
                TagEnd::Paragraph => {
                    if lists.is_empty() {
                        lines.push(PreviewLine::new());
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                let style = if in_code_block {
                    SpanStyle {
                        code: true,
                        ..SpanStyle::default()
                    }
                } else {
                    current(&style_stack)
                };
                push_text(&mut lines, &text, style);
            }
            Event::Code(code) => {
                let style = SpanStyle {
                    code: true,
                    ..current(&style_stack)
                };
                if let Some(line) = lines.last_mut() {
                    line.push(code.to_string(), style);
                }
            }
            Event::SoftBreak => {
                if let Some(line) = lines.last_mut() {
                    line.push(" ", current(&style_stack));
                }
            }
            Event::HardBreak => lines.push(PreviewLine::new()),
            Event::Rule => {
                start_block(&mut lines);
                if let Some(line) = lines.last_mut() {
                    line.push(
                        "─".repeat(40),
                        SpanStyle {
                            muted: true,
                            ..SpanStyle::default()
                        },
                    );
                }
                lines.push(PreviewLine::new());
            }
            _ => {}
        }
    }

    while lines.last().is_some_and(PreviewLine::is_empty) {
        lines.pop();
    }

    lines
}

/// Blocks are separated from earlier content by one blank line.
fn start_block(lines: &mut Vec<PreviewLine>) {
    let has_content = lines.iter().any(|l| !l.is_empty());
    if !has_content {
        return;
    }
    if !lines.last().is_some_and(PreviewLine::is_empty) {
        lines.push(PreviewLine::new());
    }
    let len = lines.len();
    if len >= 2 && !lines[len - 2].is_empty() {
        lines.push(PreviewLine::new());
    }
}

fn push_text(lines: &mut Vec<PreviewLine>, text: &str, style: SpanStyle) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(PreviewLine::new());
        }
        if !part.is_empty() {
            if let Some(line) = lines.last_mut() {
                line.push(part.replace('\t', TAB), style);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preview.rs"]
mod tests;
