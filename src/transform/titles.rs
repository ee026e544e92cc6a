//! Markdown heading reformatting.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+ ").unwrap());

/// Check whether `line` is an ATX heading (`#`s followed by a space).
pub fn is_heading(line: &str) -> bool {
    HEADING_REGEX.is_match(line)
}

/// Demote every heading by one level and surround it with blank lines.
///
/// A blank line is added before a heading unless it starts the text or the
/// previous emitted line is already blank, and after it unless it ends the
/// text or the next line is already blank.
///
/// # Example
///
/// ```
/// use cliptools::transform::format_titles;
///
/// assert_eq!(format_titles("# A\ntext"), "## A\n\ntext");
/// ```
pub fn format_titles(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut formatted: Vec<String> = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if !is_heading(line) {
            formatted.push(line.to_string());
            continue;
        }

        if formatted.last().is_some_and(|prev| !prev.trim().is_empty()) {
            formatted.push(String::new());
        }
        formatted.push(format!("#{}", line));
        if lines.get(index + 1).is_some_and(|next| !next.trim().is_empty()) {
            formatted.push(String::new());
        }
    }

    formatted.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(format_titles(""), "");
    }

    #[test]
    fn formats_sample_document() {
        let input = "\n# 一级标题\n一些内容\n## 二级标题\n###非标题\n";
        let expected = "\n## 一级标题\n\n一些内容\n\n### 二级标题\n\n###非标题\n";
        assert_eq!(format_titles(input), expected);
    }

    #[test]
    fn heading_detection_requires_space() {
        assert!(is_heading("# a"));
        assert!(is_heading("### a"));
        assert!(!is_heading("###a"));
        assert!(!is_heading(" # a"));
        assert!(!is_heading("text # a"));
    }

    #[test]
    fn heading_at_boundaries_gets_no_outer_blank() {
        assert_eq!(format_titles("# only"), "## only");
        assert_eq!(format_titles("text\n# end"), "text\n\n## end");
    }

    #[test]
    fn existing_blank_lines_are_not_doubled() {
        assert_eq!(format_titles("a\n\n# b\n\nc"), "a\n\n## b\n\nc");
    }

    #[test]
    fn consecutive_headings_share_one_blank() {
        assert_eq!(format_titles("# a\n# b"), "## a\n\n## b");
    }
}
