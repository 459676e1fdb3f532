//! Color markup, word wrapping and centering for narrative text.
//!
//! Narrative strings use a tiny markup: `[cyan]some text/]` colors its
//! content (trimmed, may span lines). Unknown tags stay literal.
use chrono::{DateTime, Utc};

/// Column width narrative lines are wrapped to.
pub const WRAP_WIDTH: usize = 80;

/// Foreground colors available to narrative markup and frame chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TextColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    /// Bright cyan.
    Cyan,
    White,
    /// 256-color palette entry.
    #[strum(disabled)]
    Indexed(u8),
}

impl TextColor {
    pub const BORDER: Self = Self::Indexed(244);
    pub const NARRATIVE: Self = Self::Indexed(7);
    pub const CHOICE: Self = Self::Indexed(251);
    pub const HINT: Self = Self::Indexed(240);

    /// Parses a markup tag name. Only the named palette is accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// ANSI SGR foreground sequence for this color.
    pub fn ansi(self) -> String {
        match self {
            TextColor::Red => "\x1b[31m".into(),
            TextColor::Green => "\x1b[32m".into(),
            TextColor::Yellow => "\x1b[33m".into(),
            TextColor::Blue => "\x1b[34m".into(),
            TextColor::Magenta => "\x1b[35m".into(),
            TextColor::Cyan => "\x1b[96m".into(),
            TextColor::White => "\x1b[37m".into(),
            TextColor::Indexed(index) => format!("\x1b[38;5;{index}m"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub color: Option<TextColor>,
    pub bold: bool,
}

impl TextStyle {
    pub const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
        }
    }

    pub const fn fg(color: TextColor) -> Self {
        Self {
            color: Some(color),
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Fills in the color from `base` when this style has none.
    #[must_use]
    pub fn or(self, base: TextStyle) -> Self {
        Self {
            color: self.color.or(base.color),
            bold: self.bold || base.bold,
        }
    }
}

/// A run of uniformly styled text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::plain())
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// Renders the span with ANSI escapes, resetting afterwards.
    pub fn to_ansi(&self) -> String {
        if self.style == TextStyle::plain() {
            return self.text.clone();
        }
        let mut out = String::new();
        if self.style.bold {
            out.push_str("\x1b[1m");
        }
        if let Some(color) = self.style.color {
            out.push_str(&color.ansi());
        }
        out.push_str(&self.text);
        out.push_str("\x1b[0m");
        out
    }
}

// ===== markup =====

/// Parses markup and wraps every source line to [`WRAP_WIDTH`].
pub fn parse_markup(text: &str) -> Vec<Vec<Span>> {
    parse_markup_with_width(text, WRAP_WIDTH)
}

pub fn parse_markup_with_width(text: &str, width: usize) -> Vec<Vec<Span>> {
    split_lines(tokenize(text))
        .into_iter()
        .flat_map(|line| wrap_spans(&line, width))
        .collect()
}

fn tokenize(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let (before, tail) = rest.split_at(open);
        plain.push_str(before);
        match colored_segment(tail) {
            Some((color, content, consumed)) => {
                if !plain.is_empty() {
                    spans.push(Span::plain(std::mem::take(&mut plain)));
                }
                spans.push(Span::new(content.trim(), TextStyle::fg(color)));
                rest = &tail[consumed..];
            }
            None => {
                plain.push('[');
                rest = &tail[1..];
            }
        }
    }
    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(Span::plain(plain));
    }
    spans
}

/// Matches `[color]content/]` at the start of `s`.
fn colored_segment(s: &str) -> Option<(TextColor, &str, usize)> {
    let close = s.find(']')?;
    let color = TextColor::from_tag(&s[1..close])?;
    let body = &s[close + 1..];
    let end = body.find("/]")?;
    Some((color, &body[..end], close + 1 + end + 2))
}

fn split_lines(spans: Vec<Span>) -> Vec<Vec<Span>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        let mut parts = span.text.split('\n');
        if let Some(first) = parts.next() {
            push_text(lines.last_mut(), first, span.style);
        }
        for part in parts {
            lines.push(Vec::new());
            push_text(lines.last_mut(), part, span.style);
        }
    }
    lines
}

fn push_text(line: Option<&mut Vec<Span>>, text: &str, style: TextStyle) {
    if let Some(line) = line {
        if !text.is_empty() {
            line.push(Span::new(text, style));
        }
    }
}

// ===== wrapping =====

type StyledChar = (char, TextStyle);

/// Greedy wrap on spaces. A word wider than `width` gets a line of its own.
fn wrap_spans(line: &[Span], width: usize) -> Vec<Vec<Span>> {
    let chars: Vec<StyledChar> = line
        .iter()
        .flat_map(|span| span.text.chars().map(move |c| (c, span.style)))
        .collect();

    let mut wrapped: Vec<Vec<StyledChar>> = Vec::new();
    let mut current: Vec<StyledChar> = Vec::new();

    for word in chars.split(|(c, _)| *c == ' ') {
        if current.is_empty() {
            current.extend_from_slice(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push((' ', joint_style(&current, word)));
            current.extend_from_slice(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current.extend_from_slice(word);
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    wrapped.into_iter().map(|chars| merge(&chars)).collect()
}

fn joint_style(left: &[StyledChar], right: &[StyledChar]) -> TextStyle {
    match (left.last(), right.first()) {
        (Some((_, a)), Some((_, b))) if a == b => *a,
        _ => TextStyle::plain(),
    }
}

fn merge(chars: &[StyledChar]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for &(c, style) in chars {
        match spans.last_mut() {
            Some(last) if last.style == style => last.text.push(c),
            _ => spans.push(Span::new(c.to_string(), style)),
        }
    }
    spans
}

/// Wraps every line of plain text to `width` columns.
pub fn word_wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .flat_map(|line| wrap_spans(&[Span::plain(line)], width))
        .map(|spans| spans.into_iter().map(|span| span.text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== centering =====

/// Left padding that centers `visible` columns inside `width`.
pub fn center_padding(visible: usize, width: usize) -> usize {
    width.saturating_sub(visible) / 2
}

/// Left-pads `text` so its visible part is centered. ANSI escapes are ignored
/// when measuring.
pub fn center_text(text: &str, width: usize) -> String {
    let visible = strip_ansi_codes(text).chars().count();
    format!("{}{}", " ".repeat(center_padding(visible, width)), text)
}

/// Removes SGR escape sequences (`ESC [ digits ; ... m`).
pub fn strip_ansi_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("\x1b[") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let params = tail
            .find(|c: char| !(c.is_ascii_digit() || c == ';'))
            .unwrap_or(tail.len());
        if tail[params..].starts_with('m') {
            rest = &tail[params + 1..];
        } else {
            out.push_str("\x1b[");
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

/// Formats a timestamp as `HH:MM:SS`.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn texts(line: &[Span]) -> Vec<&str> {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn colored_segments_are_trimmed() {
        let lines = parse_markup("Alarms blare. [red]  DANGER  /] Move!");
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), ["Alarms blare. ", "DANGER", " Move!"]);
        assert_eq!(lines[0][1].style, TextStyle::fg(TextColor::Red));
    }

    #[test]
    fn colored_segment_may_span_lines() {
        let lines = parse_markup("[cyan]first\nsecond/]");
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[1]), ["second"]);
        assert_eq!(lines[1][0].style.color, Some(TextColor::Cyan));
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let lines = parse_markup("[orange]x/] and [unclosed");
        assert_eq!(texts(&lines[0]), ["[orange]x/] and [unclosed"]);
    }

    #[test]
    fn wraps_at_width() {
        assert_eq!(word_wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
        assert_eq!(word_wrap("tiny enormousword", 5), "tiny\nenormousword");
    }

    #[test]
    fn oversized_first_word_has_no_blank_line_before_it() {
        assert_eq!(word_wrap("enormousword", 5), "enormousword");
        assert_eq!(word_wrap("abcde fgh", 5), "abcde\nfgh");
        let lines = parse_markup_with_width("[red]enormousword/] ok", 5);
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), ["enormousword"]);
        assert_eq!(texts(&lines[1]), ["ok"]);
    }

    #[test]
    fn empty_lines_survive_wrapping() {
        let lines = parse_markup("one\n\ntwo");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn wrapping_keeps_styles() {
        let lines = parse_markup_with_width("go [green]north east/]", 8);
        assert_eq!(texts(&lines[0]), ["go ", "north"]);
        assert_eq!(texts(&lines[1]), ["east"]);
        assert_eq!(lines[1][0].style.color, Some(TextColor::Green));
    }

    #[test]
    fn centering_ignores_escape_codes() {
        assert_eq!(center_text("abcd", 10), "   abcd");
        assert_eq!(center_text("\x1b[32mab\x1b[0m", 6), "  \x1b[32mab\x1b[0m");
        assert_eq!(center_text("too wide", 4), "too wide");
    }

    #[test]
    fn strips_sgr_sequences_only() {
        assert_eq!(strip_ansi_codes("\x1b[1;32mok\x1b[0m"), "ok");
        assert_eq!(strip_ansi_codes("\x1b[Hraw"), "\x1b[Hraw");
    }

    #[test]
    fn ansi_rendering_round_trips_through_strip() {
        let span = Span::new("Nexus", TextStyle::fg(TextColor::Indexed(244)).bold());
        assert_eq!(strip_ansi_codes(&span.to_ansi()), "Nexus");
    }

    #[test]
    fn timestamps_are_clock_time() {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 7, 3, 9).unwrap();
        assert_eq!(format_timestamp(&time), "07:03:09");
    }
}
