//! Text heuristics for completion and hover.
//!
//! The buffer is usually incomplete at the cursor, so these work on raw text
//! rather than the parser.

use tower_lsp::lsp_types::Position;

/// What the cursor sits in, for completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// An element name is expected.
    Element,
    /// Inside an element block, before any `:`.
    Attribute { element: String },
    /// After `key:` on the current line.
    Value { element: String, attr: String },
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// The identifier under or immediately before the cursor. Attribute names
/// contain `-`, so it counts as a word character.
pub fn word_at<'t>(text: &'t str, pos: &Position) -> Option<&'t str> {
    let line = text.lines().nth(pos.line as usize)?;
    let col = byte_offset(line, pos.character);

    let start = line[..col]
        .rfind(|c: char| !is_word_char(c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let end = col + line[col..].find(|c: char| !is_word_char(c)).unwrap_or(line.len() - col);

    (start < end).then(|| &line[start..end])
}

/// Name of the element whose block is open at the end of `before`.
pub fn find_enclosing_element(before: &str) -> Option<String> {
    let mut depth = 0i32;

    for line in before.lines().rev() {
        let code = strip_comment(line).trim();
        for ch in code.chars().rev() {
            match ch {
                '}' => depth += 1,
                '{' if depth == 0 => return element_name_on_line(code),
                '{' => depth -= 1,
                _ => {}
            }
        }
    }
    None
}

fn element_name_on_line(line: &str) -> Option<String> {
    let word = line.split_whitespace().next()?;
    let word = word.trim_end_matches('{');
    word.chars()
        .next()?
        .is_uppercase()
        .then(|| word.to_string())
}

pub fn completion_context(text: &str, pos: &Position) -> Context {
    let before = text_before(text, pos);
    let current_line = before.rsplit('\n').next().unwrap_or("");
    let code = strip_comment(current_line);

    if let Some(colon) = code.rfind(':') {
        let attr = code[..colon].trim().rsplit(|c: char| c.is_whitespace() || c == '{').next();
        return Context::Value {
            element: find_enclosing_element(&before).unwrap_or_default(),
            attr: attr.unwrap_or("").to_string(),
        };
    }

    if brace_depth(&before) == 0 {
        return Context::Element;
    }

    let typed = code.trim().rsplit(|c: char| c.is_whitespace() || c == '{').next().unwrap_or("");
    if typed.starts_with(|c: char| c.is_uppercase()) {
        Context::Element
    } else {
        Context::Attribute {
            element: find_enclosing_element(&before).unwrap_or_default(),
        }
    }
}

/// Source from the start of the file up to `pos`.
pub fn text_before(text: &str, pos: &Position) -> String {
    let line_idx = pos.line as usize;
    let mut out = String::new();
    for (i, line) in text.lines().enumerate().take(line_idx + 1) {
        if i < line_idx {
            out.push_str(line);
            out.push('\n');
        } else {
            out.push_str(&line[..byte_offset(line, pos.character)]);
        }
    }
    out
}

fn strip_comment(s: &str) -> &str {
    s.find("//").map_or(s, |i| &s[..i])
}

fn brace_depth(text: &str) -> i32 {
    text.lines()
        .flat_map(|l| strip_comment(l).chars())
        .fold(0, |d, c| match c {
            '{' => d + 1,
            '}' => (d - 1).max(0),
            _ => d,
        })
}

/// Byte index in `line` of an LSP column, which counts UTF-16 code units.
/// Columns past the end clamp to it; one inside a surrogate pair floors to
/// the start of its character.
fn byte_offset(line: &str, character: u32) -> usize {
    let target = character as usize;
    let mut units = 0;
    for (i, c) in line.char_indices() {
        units += c.len_utf16();
        if units > target {
            return i;
        }
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    const SRC: &str = "Page {\n    Section \"Dawn\" {\n        data-color-point: \"1,2,3\"\n        \n    }\n}\n";

    #[test]
    fn words_include_dashes() {
        assert_eq!(word_at(SRC, &at(2, 14)), Some("data-color-point"));
        assert_eq!(word_at(SRC, &at(1, 6)), Some("Section"));
        assert_eq!(word_at(SRC, &at(3, 8)), None);
    }

    #[test]
    fn enclosing_element_skips_closed_blocks() {
        let before = "Page {\n  Group { height: 1 }\n  ";
        assert_eq!(find_enclosing_element(before).as_deref(), Some("Page"));
        assert_eq!(find_enclosing_element("Page {\n Section \"x\" {\n").as_deref(), Some("Section"));
        assert_eq!(find_enclosing_element("Page { }"), None);
    }

    #[test]
    fn contexts() {
        assert_eq!(completion_context("", &at(0, 0)), Context::Element);
        assert_eq!(
            completion_context(SRC, &at(3, 8)),
            Context::Attribute { element: "Section".into() }
        );
        assert_eq!(
            completion_context(SRC, &at(2, 26)),
            Context::Value { element: "Section".into(), attr: "data-color-point".into() }
        );
        assert_eq!(completion_context("Page {\n    Sec", &at(1, 7)), Context::Element);
    }

    #[test]
    fn positions_past_line_end_are_clamped() {
        assert_eq!(text_before("ab\ncd", &at(1, 99)), "ab\ncd");
    }

    #[test]
    fn columns_are_utf16_units() {
        let line = "Section \"\u{1F600}\" { fill: #fff }";
        assert_eq!(word_at(line, &at(0, 15)), Some("fill"));
        assert_eq!(text_before("\u{e9}a", &at(0, 1)), "\u{e9}");
        assert_eq!(text_before("\u{1F600}a", &at(0, 1)), "");
        assert_eq!(text_before("\u{1F600}a", &at(0, 2)), "\u{1F600}");
    }
}
