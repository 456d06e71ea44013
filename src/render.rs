//! Projection of the document into styled display lines.
//!
//! The renderer word-wraps to the configured width, styles heading lines by
//! level, and highlights fenced code blocks with syntect. It also records
//! where each collected heading landed in the wrapped output: those extents
//! become the bounding boxes the scrollspy evaluates against, so the wrap
//! pass and the geometry can never disagree.

use crate::heading::Heading;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

/// Theme used when the configured one is unknown.
const FALLBACK_THEME: &str = "base16-ocean.dark";

/// Where a heading landed in the rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingExtent {
    /// First display row of the heading.
    pub row: usize,
    /// Number of display rows the heading occupies after wrapping.
    pub height: usize,
}

/// The rendered document: display lines plus one extent per collected
/// heading, parallel to the heading sequence.
pub struct RenderedDocument {
    /// Styled display lines, ready for the content pane.
    pub lines: Vec<Line<'static>>,
    /// Heading extents in sequence order.
    pub extents: Vec<HeadingExtent>,
}

/// Renders a document snapshot into display lines.
pub struct Renderer {
    syntaxes: SyntaxSet,
    theme: Theme,
    wrap_width: usize,
}

impl Renderer {
    /// Build a renderer wrapping at `wrap_width` columns and highlighting
    /// code with `theme_name` (falling back to a bundled default).
    #[must_use]
    pub fn new(wrap_width: usize, theme_name: &str) -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme_name)
            .or_else(|| themes.themes.remove(FALLBACK_THEME))
            .unwrap_or_default();
        Self {
            syntaxes,
            theme,
            wrap_width,
        }
    }

    /// Render `source`, recording an extent for every collected heading.
    #[must_use]
    pub fn render(&self, source: &str, headings: &[Heading]) -> RenderedDocument {
        let heading_at: HashMap<usize, usize> =
            headings.iter().map(|h| (h.source_line, h.order)).collect();
        let mut extents = vec![HeadingExtent { row: 0, height: 1 }; headings.len()];
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut code: Option<HighlightLines<'_>> = None;

        for (source_line, raw) in source.lines().enumerate() {
            if let Some(token) = fence_delimiter(raw) {
                if code.is_some() {
                    code = None;
                } else {
                    code = Some(self.block_highlighter(token));
                }
                lines.push(Line::from(Span::styled(
                    raw.to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
                continue;
            }
            if let Some(highlighter) = code.as_mut() {
                lines.push(highlight_code_line(highlighter, &self.syntaxes, raw));
                continue;
            }

            let wrapped = wrap_line(raw, self.wrap_width);
            if let Some(&order) = heading_at.get(&source_line) {
                extents[order] = HeadingExtent {
                    row: lines.len(),
                    height: wrapped.len(),
                };
            }
            let style = atx_level(raw).map_or_else(Style::default, heading_style);
            for piece in wrapped {
                lines.push(Line::from(Span::styled(piece, style)));
            }
        }

        RenderedDocument { lines, extents }
    }

    fn block_highlighter(&self, token: &str) -> HighlightLines<'_> {
        let syntax = if token.is_empty() {
            self.syntaxes.find_syntax_plain_text()
        } else {
            self.syntaxes
                .find_syntax_by_token(token)
                .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
        };
        HighlightLines::new(syntax, &self.theme)
    }
}

fn highlight_code_line(
    highlighter: &mut HighlightLines<'_>,
    syntaxes: &SyntaxSet,
    raw: &str,
) -> Line<'static> {
    match highlighter.highlight_line(raw, syntaxes) {
        Ok(regions) => Line::from(
            regions
                .into_iter()
                .map(|(style, piece)| {
                    let fg = style.foreground;
                    Span::styled(
                        piece.to_string(),
                        Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                    )
                })
                .collect::<Vec<_>>(),
        ),
        Err(_) => Line::from(raw.to_string()),
    }
}

/// Token after an opening fence, `None` for non-fence lines.
fn fence_delimiter(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("```")
        .or_else(|| trimmed.strip_prefix("~~~"))
        .map(str::trim)
}

/// Heading level of an ATX line, outside of code fences.
fn atx_level(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if rest.is_empty() || rest.starts_with(' ') {
        Some(hashes)
    } else {
        None
    }
}

fn heading_style(level: usize) -> Style {
    match level {
        1 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        2 => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        3 => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}

/// Greedy word wrap preserving the line's leading indentation on
/// continuation rows. Overlong words are hard-split.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }
    let indent: String = text.chars().take_while(|c| c.is_whitespace()).collect();
    let avail = width.saturating_sub(indent.chars().count()).max(1);

    let mut out = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for word in text.trim_start().split_whitespace() {
        let word_len = word.chars().count();
        if count > 0 && count + 1 + word_len > avail {
            out.push(format!("{indent}{current}"));
            current.clear();
            count = 0;
        }
        if word_len > avail && count == 0 {
            let mut chars: Vec<char> = word.chars().collect();
            while chars.len() > avail {
                let chunk: String = chars.drain(..avail).collect();
                out.push(format!("{indent}{chunk}"));
            }
            current = chars.into_iter().collect();
            count = current.chars().count();
            continue;
        }
        if count > 0 {
            current.push(' ');
            count += 1;
        }
        current.push_str(word);
        count += word_len;
    }
    if !current.is_empty() || out.is_empty() {
        out.push(format!("{indent}{current}"));
    }
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
