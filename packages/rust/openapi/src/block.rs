//! Text-level detection and replacement of top-level `info:` blocks.
//!
//! A block starts with `info:` at column zero followed by at least one
//! whitespace character, and runs up to (not including) the next line that
//! starts with a non-whitespace character, or to the end of the text. Nothing
//! else in the document is parsed, so a document with several top-level
//! `info:` lines has every one of them replaced.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `info:` at the start of a line plus the whitespace run after it.
static INFO_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^info:\s+").expect("valid regex"));

/// The first character of the next top-level line.
static TOP_LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\S").expect("valid regex"));

/// Result of [`replace_info_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The document with every matched block replaced.
    pub text: String,
    /// Number of blocks replaced.
    pub replaced: usize,
}

/// Byte ranges of every `info:` block in `text`, in document order.
pub fn find_info_blocks(text: &str) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(head) = INFO_HEAD_RE.find_at(text, pos) {
        // `find_at` keeps line anchors relative to the whole haystack, so a
        // top-level line right at `head.end()` ends the block there.
        let end = TOP_LEVEL_RE
            .find_at(text, head.end())
            .map_or(text.len(), |m| m.start());
        blocks.push(head.start()..end);
        pos = end;
    }

    blocks
}

/// Replace every `info:` block in `text` with `replacement`, verbatim.
pub fn replace_info_blocks(text: &str, replacement: &str) -> Substitution {
    let blocks = find_info_blocks(text);
    if blocks.is_empty() {
        return Substitution {
            text: text.to_string(),
            replaced: 0,
        };
    }

    let mut out = String::with_capacity(text.len() + replacement.len() * blocks.len());
    let mut last = 0;
    for block in &blocks {
        out.push_str(&text[last..block.start]);
        out.push_str(replacement);
        last = block.end;
    }
    out.push_str(&text[last..]);

    Substitution {
        text: out,
        replaced: blocks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_INFO: &str = "info:\n  title: New\n";

    #[test]
    fn replaces_block_up_to_next_top_level_key() {
        let input = "openapi: 3.0.1\ninfo:\n  title: Old\n  version: '0.1'\nservers:\n  - url: x\n";
        let result = replace_info_blocks(input, NEW_INFO);
        assert_eq!(result.replaced, 1);
        assert_eq!(
            result.text,
            "openapi: 3.0.1\ninfo:\n  title: New\nservers:\n  - url: x\n"
        );
    }

    #[test]
    fn block_at_end_runs_to_end_of_text() {
        let input = "openapi: 3.0.1\ninfo:\n  title: Old\n\n\n";
        assert_eq!(find_info_blocks(input), vec![15..input.len()]);
        assert_eq!(
            replace_info_blocks(input, NEW_INFO).text,
            "openapi: 3.0.1\ninfo:\n  title: New\n"
        );
    }

    #[test]
    fn no_info_block_leaves_text_untouched() {
        let input = "openapi: 3.0.1\npaths: {}\n";
        let result = replace_info_blocks(input, NEW_INFO);
        assert_eq!(result.replaced, 0);
        assert_eq!(result.text, input);
    }

    #[test]
    fn nested_info_key_is_not_a_block() {
        let input = "components:\n  info:\n    title: Nested\n";
        assert!(find_info_blocks(input).is_empty());
    }

    #[test]
    fn info_needs_trailing_whitespace() {
        assert!(find_info_blocks("info:x\n").is_empty());
        assert!(find_info_blocks("info:").is_empty());
        assert!(find_info_blocks("infos:\n  a: 1\n").is_empty());
    }

    #[test]
    fn empty_block_before_next_key() {
        let input = "info:\nservers: []\n";
        assert_eq!(find_info_blocks(input), vec![0..6]);
        assert_eq!(
            replace_info_blocks(input, NEW_INFO).text,
            "info:\n  title: New\nservers: []\n"
        );
    }

    #[test]
    fn inline_info_value_is_replaced_with_its_line() {
        let input = "info: {title: Old}\npaths: {}\n";
        assert_eq!(
            replace_info_blocks(input, NEW_INFO).text,
            "info:\n  title: New\npaths: {}\n"
        );
    }

    #[test]
    fn every_top_level_info_block_is_replaced() {
        let input = "info:\n  title: A\npaths: {}\ninfo:\n  title: B\n";
        let result = replace_info_blocks(input, NEW_INFO);
        assert_eq!(result.replaced, 2);
        assert_eq!(
            result.text,
            "info:\n  title: New\npaths: {}\ninfo:\n  title: New\n"
        );
    }

    #[test]
    fn comment_at_column_zero_ends_block() {
        let input = "info:\n  title: Old\n# servers follow\nservers: []\n";
        assert_eq!(
            replace_info_blocks(input, NEW_INFO).text,
            "info:\n  title: New\n# servers follow\nservers: []\n"
        );
    }

    #[test]
    fn replacement_is_inserted_literally() {
        let input = "info:\n  title: Old\npaths: {}\n";
        let replacement = "info:\n  description: costs $1 \\ $2\n";
        assert_eq!(
            replace_info_blocks(input, replacement).text,
            "info:\n  description: costs $1 \\ $2\npaths: {}\n"
        );
    }

    #[test]
    fn crlf_line_endings_outside_block_are_preserved() {
        let input = "openapi: 3.0.1\r\ninfo:\r\n  title: Old\r\npaths: {}\r\n";
        assert_eq!(
            replace_info_blocks(input, NEW_INFO).text,
            "openapi: 3.0.1\r\ninfo:\n  title: New\npaths: {}\r\n"
        );
    }
}
