//! Markdown parser for terminal rendering
//!
//! Converts bot message text to styled ratatui Lines for display in the TUI.
//! Handles fenced code blocks, inline code, bold, italic, strikethrough,
//! headings, lists, links and GFM tables.
//!
//! Fences with a language tag get block chrome: a header with the language,
//! an optional line count, the Expand/Collapse and Copy Code affordances,
//! numbered lines and, when collapsed, a "Click to show more" footer.
//! Untagged fences are rendered like inline code.

mod code_blocks;
mod styles;

pub use code_blocks::{extract_code_blocks, fence_language, CodeBlock, DEFAULT_COLLAPSE_THRESHOLD};

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::view_state::copy_feedback::{LABEL_COPIED, LABEL_COPY};
use styles::{
    STYLE_BLOCK_ACTION, STYLE_BLOCK_BORDER, STYLE_BLOCK_LANGUAGE, STYLE_BLOCK_META,
    STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_INLINE_CODE, STYLE_LINE_NUMBER, STYLE_LINK,
    STYLE_SELECTED_BORDER, STYLE_TABLE_BORDER, STYLE_TABLE_HEADER,
};

pub const LABEL_EXPAND: &str = "Expand";
pub const LABEL_COLLAPSE: &str = "Collapse";
pub const LABEL_SHOW_MORE: &str = "Click to show more";

/// Per-message rendering state for code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlockOptions {
    pub collapse_threshold: usize,
    /// Expansion applies to every collapsible block of the message
    pub expanded: bool,
    /// Index of the block currently showing "Copied!"
    pub copied: Option<usize>,
    /// Index of the block targeted by copy
    pub selected: Option<usize>,
}

impl Default for CodeBlockOptions {
    fn default() -> Self {
        Self {
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            expanded: false,
            copied: None,
            selected: None,
        }
    }
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Whether the last block of `text` is paragraph or list item text.
///
/// Code blocks, tables, headings and rules end with chrome or styling that
/// nothing should be appended to.
pub fn ends_in_prose(text: &str) -> bool {
    let mut prose = false;
    for event in Parser::new_ext(text, parser_options()) {
        match event {
            Event::Start(Tag::Paragraph | Tag::Item) => prose = true,
            Event::Start(
                Tag::CodeBlock(_) | Tag::Table(_) | Tag::Heading { .. } | Tag::HtmlBlock,
            )
            | Event::Rule => prose = false,
            _ => {}
        }
    }
    prose
}

/// Render markdown text with default code block options.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    render_markdown_with(text, &CodeBlockOptions::default())
}

/// Render markdown text to a vector of styled Lines.
///
/// Gracefully handles incomplete markdown during the typing reveal by
/// rendering partial content without crashing.
pub fn render_markdown_with(text: &str, options: &CodeBlockOptions) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(text, parser_options());
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();

    // Style stack for nested formatting
    let mut style_stack: Vec<Style> = vec![Style::default()];

    // Tagged fence being collected: (language, code)
    let mut tagged_block: Option<(String, String)> = None;
    let mut in_plain_block = false;
    let mut block_index = 0usize;

    // Ordered list counters, one per nesting level (None = bullets)
    let mut list_stack: Vec<Option<u64>> = Vec::new();

    let mut in_table = false;
    let mut table_rows: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(kind) => {
                    separate_block(&mut lines, &mut current_spans);
                    let language = match &kind {
                        CodeBlockKind::Fenced(info) => fence_language(info),
                        CodeBlockKind::Indented => None,
                    };
                    match language {
                        Some(language) => tagged_block = Some((language.to_string(), String::new())),
                        None => in_plain_block = true,
                    }
                }
                Tag::Heading { .. } => {
                    separate_block(&mut lines, &mut current_spans);
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => push_modifier(&mut style_stack, Modifier::BOLD),
                Tag::Emphasis => push_modifier(&mut style_stack, Modifier::ITALIC),
                Tag::Strikethrough => push_modifier(&mut style_stack, Modifier::CROSSED_OUT),
                Tag::Paragraph => {
                    if list_stack.is_empty() {
                        separate_block(&mut lines, &mut current_spans);
                    }
                }
                Tag::List(start) => {
                    if list_stack.is_empty() {
                        separate_block(&mut lines, &mut current_spans);
                    } else {
                        flush(&mut lines, &mut current_spans);
                    }
                    list_stack.push(start);
                }
                Tag::Item => {
                    flush(&mut lines, &mut current_spans);
                    let depth = list_stack.len().saturating_sub(1);
                    let marker = match list_stack.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{}. ", n);
                            *n += 1;
                            marker
                        }
                        _ => "• ".to_string(),
                    };
                    let current_style = *style_stack.last().unwrap_or(&Style::default());
                    current_spans.push(Span::styled(
                        format!("{}{}", "  ".repeat(depth), marker),
                        current_style,
                    ));
                }
                Tag::Link { .. } => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.patch(STYLE_LINK));
                }
                Tag::Table(_) => {
                    separate_block(&mut lines, &mut current_spans);
                    in_table = true;
                    table_rows.clear();
                }
                Tag::TableHead | Tag::TableRow => current_row.clear(),
                Tag::TableCell => current_cell.clear(),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::CodeBlock => {
                    if let Some((language, code)) = tagged_block.take() {
                        let block = CodeBlock::new(language, code);
                        render_code_block(&block, block_index, options, &mut lines);
                        block_index += 1;
                    } else {
                        flush(&mut lines, &mut current_spans);
                        in_plain_block = false;
                    }
                }
                TagEnd::Heading(_) => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link => {
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => flush(&mut lines, &mut current_spans),
                TagEnd::List(_) => {
                    flush(&mut lines, &mut current_spans);
                    list_stack.pop();
                }
                TagEnd::TableCell => current_row.push(std::mem::take(&mut current_cell)),
                TagEnd::TableHead | TagEnd::TableRow => {
                    if !current_row.is_empty() {
                        table_rows.push(std::mem::take(&mut current_row));
                    }
                }
                TagEnd::Table => {
                    render_table_to_lines(&table_rows, &mut lines);
                    in_table = false;
                    table_rows.clear();
                }
                _ => {}
            },
            Event::Text(text_content) => {
                if let Some((_, code)) = tagged_block.as_mut() {
                    code.push_str(&text_content);
                } else if in_table {
                    current_cell.push_str(&text_content);
                } else if in_plain_block {
                    // Preserve whitespace; each newline becomes its own Line
                    for (i, line_content) in text_content.split('\n').enumerate() {
                        if i > 0 {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                        if !line_content.is_empty() {
                            current_spans
                                .push(Span::styled(line_content.to_string(), STYLE_INLINE_CODE));
                        }
                    }
                } else {
                    let current_style = *style_stack.last().unwrap_or(&Style::default());
                    for (i, part) in text_content.split('\n').enumerate() {
                        if i > 0 {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                        if !part.is_empty() {
                            current_spans.push(Span::styled(part.to_string(), current_style));
                        }
                    }
                }
            }
            Event::Code(code) => {
                if in_table {
                    current_cell.push_str(&code);
                } else {
                    current_spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_table {
                    current_cell.push(' ');
                } else {
                    lines.push(Line::from(std::mem::take(&mut current_spans)));
                }
            }
            _ => {}
        }
    }

    // A fence still open at the end of a partial reveal
    if let Some((language, code)) = tagged_block.take() {
        flush(&mut lines, &mut current_spans);
        render_code_block(&CodeBlock::new(language, code), block_index, options, &mut lines);
    }

    if !current_spans.is_empty() {
        lines.push(Line::from(current_spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

fn flush(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

/// Flush pending content and leave one blank line before a new block.
fn separate_block(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    flush(lines, spans);
    let last_is_blank = lines.last().is_some_and(|l| l.width() == 0);
    if !lines.is_empty() && !last_is_blank {
        lines.push(Line::from(""));
    }
}

fn push_modifier(style_stack: &mut Vec<Style>, modifier: Modifier) {
    let current = *style_stack.last().unwrap_or(&Style::default());
    style_stack.push(current.add_modifier(modifier));
}

/// Render a tagged code block with its header, numbered lines and footer.
fn render_code_block(
    block: &CodeBlock,
    index: usize,
    options: &CodeBlockOptions,
    lines: &mut Vec<Line<'static>>,
) {
    let collapsible = block.is_collapsible(options.collapse_threshold);
    let collapsed = collapsible && !options.expanded;
    let line_count = block.line_count();
    let border = if options.selected == Some(index) {
        STYLE_SELECTED_BORDER
    } else {
        STYLE_BLOCK_BORDER
    };

    // Header: language, line count, affordances
    let mut header = vec![
        Span::styled("┌ ".to_string(), border),
        Span::styled(block.language.clone(), STYLE_BLOCK_LANGUAGE),
    ];
    if collapsible {
        header.push(Span::styled(format!("  {} lines", line_count), STYLE_BLOCK_META));
        let toggle = if options.expanded { LABEL_COLLAPSE } else { LABEL_EXPAND };
        header.push(Span::styled(format!("  [{}]", toggle), STYLE_BLOCK_ACTION));
    }
    let copy_label = if options.copied == Some(index) {
        LABEL_COPIED
    } else {
        LABEL_COPY
    };
    header.push(Span::styled(format!("  [{}]", copy_label), STYLE_BLOCK_ACTION));
    lines.push(Line::from(header));

    let visible = if collapsed {
        options.collapse_threshold
    } else {
        line_count
    };
    let number_width = line_count.to_string().len();
    for (n, code_line) in block.code.split('\n').take(visible).enumerate() {
        lines.push(Line::from(vec![
            Span::styled("│ ".to_string(), border),
            Span::styled(
                format!("{:>width$} ", n + 1, width = number_width),
                STYLE_LINE_NUMBER,
            ),
            Span::styled(code_line.to_string(), STYLE_CODE_BLOCK),
        ]));
    }

    if collapsed {
        lines.push(Line::from(vec![
            Span::styled("│ ".to_string(), border),
            Span::styled(LABEL_SHOW_MORE.to_string(), STYLE_BLOCK_ACTION),
        ]));
    }
    lines.push(Line::from(Span::styled("└".to_string(), border)));
}

/// Render a table to styled Lines.
///
/// Takes the collected table rows (each row is a Vec of cell strings) and
/// renders them as formatted lines with proper column alignment and borders.
fn render_table_to_lines(table_rows: &[Vec<String>], lines: &mut Vec<Line<'static>>) {
    let num_cols = table_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if num_cols == 0 {
        return;
    }

    let mut col_widths: Vec<usize> = vec![3; num_cols];
    for row in table_rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.trim().width());
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '┌', '┬', '┐'),
        STYLE_TABLE_BORDER,
    )));

    for (row_idx, row) in table_rows.iter().enumerate() {
        let style = if row_idx == 0 {
            STYLE_TABLE_HEADER
        } else {
            Style::default()
        };
        let mut spans: Vec<Span<'static>> = vec![Span::styled("│".to_string(), STYLE_TABLE_BORDER)];

        for (col_idx, width) in col_widths.iter().enumerate() {
            let content = row.get(col_idx).map(|c| c.trim()).unwrap_or("");
            let padding = width.saturating_sub(content.width());
            spans.push(Span::styled(
                format!(" {}{} ", content, " ".repeat(padding)),
                style,
            ));
            spans.push(Span::styled("│".to_string(), STYLE_TABLE_BORDER));
        }
        lines.push(Line::from(spans));

        if row_idx == 0 && table_rows.len() > 1 {
            lines.push(Line::from(Span::styled(
                build_table_border(&col_widths, '├', '┼', '┤'),
                STYLE_TABLE_BORDER,
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '└', '┴', '┘'),
        STYLE_TABLE_BORDER,
    )));
}

/// Build a table border line with the given corner and junction characters.
fn build_table_border(col_widths: &[usize], left: char, middle: char, right: char) -> String {
    let inner: Vec<String> = col_widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, inner.join(&middle.to_string()), right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line]) -> String {
        lines.iter().map(line_text).collect::<Vec<_>>().join("\n")
    }

    fn numbered_code(n: usize) -> String {
        let body: Vec<String> = (1..=n).map(|i| format!("line{}", i)).collect();
        format!("```rust\n{}\n```", body.join("\n"))
    }

    #[test]
    fn test_ends_in_prose() {
        assert!(ends_in_prose("Hello"));
        assert!(ends_in_prose("- one\n- tw"));
        assert!(ends_in_prose("```rust\nfn a() {}\n```\n\nAfter"));
        assert!(!ends_in_prose("Here:\n\n```rust\nfn ma"));
        assert!(!ends_in_prose("| a | b |\n|---|---|\n| 1 | 2 |"));
        assert!(!ends_in_prose("# Title"));
        assert!(!ends_in_prose(""));
    }

    #[test]
    fn test_plain_text() {
        let lines = render_markdown("Hello, world!");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Hello, world!");
    }

    #[test]
    fn test_empty_input() {
        let lines = render_markdown("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_bold_italic_strikethrough() {
        let lines = render_markdown("**bold** *italic* ~~gone~~");
        let find = |needle: &str| {
            lines[0]
                .spans
                .iter()
                .find(|s| s.content.contains(needle))
                .cloned()
                .expect("span present")
        };
        assert!(find("bold").style.add_modifier.contains(Modifier::BOLD));
        assert!(find("italic").style.add_modifier.contains(Modifier::ITALIC));
        assert!(find("gone").style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_inline_code() {
        let lines = render_markdown("Use `cargo run` to start");
        let code_span = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "cargo run")
            .expect("Should have inline code span");
        assert_eq!(code_span.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_heading_style() {
        let lines = render_markdown("# Title");
        assert_eq!(lines[0].spans[0].style, STYLE_HEADING);
    }

    #[test]
    fn test_ordered_and_bullet_lists() {
        let text = all_text(&render_markdown("1. one\n2. two\n\n- a\n- b"));
        assert!(text.contains("1. one"));
        assert!(text.contains("2. two"));
        assert!(text.contains("• a"));
    }

    #[test]
    fn test_tagged_block_has_header_and_line_numbers() {
        let lines = render_markdown("```rust\nfn main() {}\nlet x = 1;\n```");
        let header = line_text(&lines[0]);
        assert!(header.contains("rust"));
        assert!(header.contains("[Copy Code]"));
        assert!(!header.contains("lines"));
        assert!(!header.contains(LABEL_EXPAND));

        assert_eq!(line_text(&lines[1]), "│ 1 fn main() {}");
        assert_eq!(line_text(&lines[2]), "│ 2 let x = 1;");
        assert_eq!(line_text(&lines[3]), "└");
    }

    #[test]
    fn test_untagged_fence_has_no_chrome() {
        let text = all_text(&render_markdown("```\n    indented\n```"));
        assert!(text.contains("    indented"));
        assert!(!text.contains(LABEL_COPY));
        assert!(!text.contains('┌'));
    }

    #[test]
    fn test_long_block_collapsed_by_default() {
        let lines = render_markdown(&numbered_code(20));
        let text = all_text(&lines);
        assert!(line_text(&lines[0]).contains("20 lines"));
        assert!(line_text(&lines[0]).contains("[Expand]"));
        assert!(text.contains("line15"));
        assert!(!text.contains("line16"));
        assert!(text.contains(LABEL_SHOW_MORE));
    }

    #[test]
    fn test_expanded_block_shows_everything() {
        let options = CodeBlockOptions {
            expanded: true,
            ..CodeBlockOptions::default()
        };
        let lines = render_markdown_with(&numbered_code(20), &options);
        let text = all_text(&lines);
        assert!(line_text(&lines[0]).contains("[Collapse]"));
        assert!(text.contains("line20"));
        assert!(!text.contains(LABEL_SHOW_MORE));
    }

    #[test]
    fn test_fifteen_lines_not_collapsible() {
        let lines = render_markdown(&numbered_code(15));
        let text = all_text(&lines);
        assert!(!text.contains(LABEL_EXPAND));
        assert!(text.contains("line15"));
        assert!(!text.contains(LABEL_SHOW_MORE));
    }

    #[test]
    fn test_copied_label_only_on_copied_block() {
        let md = "```a\nx\n```\n\n```b\ny\n```";
        let options = CodeBlockOptions {
            copied: Some(1),
            ..CodeBlockOptions::default()
        };
        let lines = render_markdown_with(md, &options);
        let headers: Vec<String> = lines
            .iter()
            .map(line_text)
            .filter(|l| l.starts_with('┌'))
            .collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].contains(LABEL_COPY));
        assert!(headers[1].contains(LABEL_COPIED));
    }

    #[test]
    fn test_partial_markdown_does_not_panic() {
        let source = "Some **bold and `code\n\n```python\nprint(1)\n| a | b |\n|---";
        for end in 0..=source.len() {
            if source.is_char_boundary(end) {
                let _ = render_markdown(&source[..end]);
            }
        }
    }

    #[test]
    fn test_table_rendering() {
        let lines = render_markdown("| Name | Age |\n|------|-----|\n| Ada | 36 |");
        let text = all_text(&lines);
        assert!(text.contains("┌"));
        assert!(text.contains("│ Name │ Age │"));
        assert!(text.contains("│ Ada  │ 36  │"));
        assert!(text.contains("└"));
    }

    #[test]
    fn test_paragraphs_are_separated() {
        let lines = render_markdown("first\n\nsecond");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].width(), 0);
    }
}
