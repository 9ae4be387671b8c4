//! Diagnostics for a whole `.tint` buffer.

use scrolltint_core::{COLOR_POINT_ATTR, parse_color_point};
use scrolltint_page::ast::{Attr, Value};
use scrolltint_page::{PageDocument, PageLayout, parse_str};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

const SOURCE: &str = "scrolltint";

pub fn page_diagnostics(text: &str) -> Vec<Diagnostic> {
    let lines = LineIndex::new(text);
    match parse_str(text) {
        Ok(doc) => color_point_diagnostics(&doc, &lines),
        Err(e) => vec![diagnostic(
            lines.span(e.line, e.col, 1),
            DiagnosticSeverity::ERROR,
            e.message.clone(),
        )],
    }
}

fn color_point_diagnostics(doc: &PageDocument, lines: &LineIndex<'_>) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    let marked = doc.select_with_attr(COLOR_POINT_ATTR);
    for el in &marked {
        let Some(attr) = el.attr(COLOR_POINT_ATTR) else { continue };
        match &attr.value {
            Value::Str(s) => {
                if let Err(e) = parse_color_point(s) {
                    out.push(diagnostic(
                        lines.attr_span(attr),
                        DiagnosticSeverity::ERROR,
                        format!("invalid color point {s:?}: {e}; the page background will not change"),
                    ));
                }
            }
            other => out.push(diagnostic(
                lines.attr_span(attr),
                DiagnosticSeverity::ERROR,
                format!("color point must be a string like \"255, 0, 0\", found {}", other.kind_name()),
            )),
        }
    }

    if marked.len() < 2 {
        let root = &doc.root;
        out.push(diagnostic(
            lines.span(root.line, root.col, root.tag.chars().count()),
            DiagnosticSeverity::WARNING,
            format!(
                "{} color point{} found; at least two are needed, so the background effect stays inert",
                marked.len(),
                if marked.len() == 1 { "" } else { "s" },
            ),
        ));
    }

    let layout = PageLayout::compute(doc);
    let mut previous: Option<f32> = None;
    for b in layout.with_attr(COLOR_POINT_ATTR) {
        if let Some(prev) = previous.filter(|&p| b.top < p) {
            if let Some(attr) = b.element.attr(COLOR_POINT_ATTR) {
                out.push(diagnostic(
                    lines.attr_span(attr),
                    DiagnosticSeverity::INFORMATION,
                    format!(
                        "color point at offset {} comes before the previous one at {}; points are sorted by offset",
                        b.top, prev
                    ),
                ));
            }
        }
        previous = Some(previous.map_or(b.top, |p| p.max(b.top)));
    }

    out
}

fn diagnostic(range: Range, severity: DiagnosticSeverity, message: String) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        source: Some(SOURCE.to_string()),
        message,
        ..Default::default()
    }
}

/// Maps the parser's 1-based character columns onto LSP positions, whose
/// columns count UTF-16 code units.
struct LineIndex<'t> {
    lines: Vec<&'t str>,
}

impl<'t> LineIndex<'t> {
    fn new(text: &'t str) -> Self {
        Self { lines: text.lines().collect() }
    }

    fn position(&self, line: u32, chars: usize) -> Position {
        let Some(text) = self.lines.get(line as usize) else {
            return Position::new(line, chars as u32);
        };
        let mut units = 0;
        let mut seen = 0;
        for c in text.chars().take(chars) {
            units += c.len_utf16();
            seen += 1;
        }
        // Past the line end, one column per missing character.
        Position::new(line, (units + chars - seen) as u32)
    }

    /// Range of `len` characters starting at a 1-based line/col.
    fn span(&self, line: usize, col: usize, len: usize) -> Range {
        let line = line.saturating_sub(1) as u32;
        let col = col.saturating_sub(1);
        Range {
            start: self.position(line, col),
            end: self.position(line, col + len.max(1)),
        }
    }

    fn attr_span(&self, attr: &Attr) -> Range {
        self.span(attr.line, attr.col, attr.key.chars().count())
    }
}
