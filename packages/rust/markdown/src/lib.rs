//! Incremental Markdown text builder.
//!
//! [`MarkdownDocument`] appends headings, paragraphs, list items and code
//! blocks to a single growing buffer, tracking the list nesting depth used
//! for indentation. The [`style`] module holds the inline wrappers (bold,
//! italic, code, color, subscript) that callers compose into item text.

pub mod style;

/// Markdown hard line break: two trailing spaces and a newline.
pub const ENDL: &str = "  \n";

/// One level of list indentation.
const INDENT: &str = "    ";

// ---------------------------------------------------------------------------
// MarkdownDocument
// ---------------------------------------------------------------------------

/// An accumulating Markdown buffer with list-depth bookkeeping.
///
/// Every `open_list_item*` call increments the depth and every
/// `close_list_item*` call decrements it. Balancing the two is the caller's
/// job; the depth is only clamped so it never goes below zero.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    data: String,
    list_depth: usize,
}

impl MarkdownDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated document.
    pub fn contents(&self) -> &str {
        &self.data
    }

    /// Consume the builder, returning the accumulated document.
    pub fn into_contents(self) -> String {
        self.data
    }

    /// Current list nesting depth.
    pub fn depth(&self) -> usize {
        self.list_depth
    }

    /// Append a `- text` bullet at the current depth, then nest one level.
    ///
    /// An empty `text` only opens a nesting level without emitting a bullet.
    pub fn open_list_item(&mut self, text: &str) {
        if !text.is_empty() {
            self.data.push_str(&INDENT.repeat(self.list_depth));
            self.data.push_str("- ");
            self.data.push_str(text);
        }
        self.list_depth += 1;
    }

    /// Like [`open_list_item`](Self::open_list_item), terminating the bullet with a line break.
    pub fn open_list_item_line(&mut self, text: &str) {
        self.open_list_item(&format!("{text}{ENDL}"));
    }

    /// Leave one nesting level (never below zero).
    pub fn close_list_item(&mut self) {
        self.list_depth = self.list_depth.saturating_sub(1);
    }

    /// Leave one nesting level and end the current line.
    pub fn close_list_item_line(&mut self) {
        self.close_list_item();
        self.data.push('\n');
    }

    /// Append raw text with no indentation or line break.
    pub fn append_text(&mut self, text: &str) {
        self.data.push_str(text);
    }

    /// Append an indented line of text terminated with a hard line break.
    pub fn append_text_line(&mut self, text: &str) {
        let indent = self.indentation();
        self.data.push_str(&indent);
        self.data.push_str(text);
        self.data.push_str(ENDL);
    }

    /// Append a section intro: a `#`-prefixed line that is not a spaced heading.
    pub fn append_paragraph(&mut self, text: &str) {
        let indent = self.indentation();
        self.data.push('\n');
        self.data.push_str(&indent);
        self.data.push('#');
        self.data.push_str(text);
        self.data.push('\n');
    }

    /// Append a heading with `level` markers.
    pub fn append_heading(&mut self, level: usize, text: &str) {
        let indent = self.indentation();
        self.data.push('\n');
        self.data.push_str(&indent);
        self.data.push_str(&"#".repeat(level));
        self.data.push(' ');
        self.data.push_str(text);
        self.data.push('\n');
    }

    pub fn append_blank_line(&mut self) {
        self.data.push_str(ENDL);
    }

    /// Format a fenced code block.
    ///
    /// The block is returned, not appended.
    pub fn format_code_block(&self, text: &str, language: &str) -> String {
        let indent = self.indentation();
        format!("```{language}\n{indent}{text}\n{indent}```\n")
    }

    /// Indentation for text starting a fresh line inside a list.
    ///
    /// Looks at the buffer with trailing whitespace trimmed, so a pending
    /// line break never counts and block text stays flush left.
    fn indentation(&self) -> String {
        if self.list_depth == 0 || !self.data.trim_end().ends_with('\n') {
            return String::new();
        }
        INDENT.repeat(self.list_depth)
    }
}
