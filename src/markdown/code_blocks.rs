//! Fenced code block extraction.
//!
//! Only fences with a language tag count as code blocks; an untagged fence is
//! rendered as plain inline-styled code and is not copyable on its own.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Blocks with more lines than this are collapsed by default.
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 15;

/// A tagged fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    /// Code text with the final newline stripped
    pub code: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        let mut code = code.into();
        if code.ends_with('\n') {
            code.pop();
        }
        Self {
            language: language.into(),
            code,
        }
    }

    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }

    pub fn is_collapsible(&self, threshold: usize) -> bool {
        self.line_count() > threshold
    }
}

/// Language tag of a fence info string.
///
/// The tag is the leading run of word characters of the first word, so
/// `rust,ignore` yields `rust` and `{.python}` yields nothing.
pub fn fence_language(info: &str) -> Option<&str> {
    let word = info.split_whitespace().next()?;
    let end = word
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let tag = &word[..end];
    (!tag.is_empty()).then_some(tag)
}

/// All tagged code blocks in document order.
///
/// Unterminated fences (common mid-reveal) are included with whatever
/// content has been seen so far.
pub fn extract_code_blocks(markdown: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, String)> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if let Some(language) = fence_language(&info) {
                    current = Some((language.to_string(), String::new()));
                }
            }
            Event::Text(text) => {
                if let Some((_, code)) = current.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = current.take() {
                    blocks.push(CodeBlock::new(language, code));
                }
            }
            _ => {}
        }
    }

    if let Some((language, code)) = current {
        blocks.push(CodeBlock::new(language, code));
    }
    blocks
}
