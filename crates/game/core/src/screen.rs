//! Line-oriented terminal model scenes draw into.
use crate::text::{Span, TextStyle, center_padding, center_text, parse_markup};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// How a line appears when a scene is first drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Instant,
    /// Revealed character by character by the frontend.
    Typewriter,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenLine {
    pub spans: Vec<Span>,
    pub align: Align,
    pub reveal: Reveal,
}

impl ScreenLine {
    pub fn visible_len(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A cleared-and-redrawn buffer of styled lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    cols: usize,
    lines: Vec<ScreenLine>,
}

impl Screen {
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            lines: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    pub fn lines(&self) -> &[ScreenLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn blank(&mut self) {
        self.lines.push(ScreenLine::default());
    }

    pub fn write_line(&mut self, text: impl Into<String>, style: TextStyle) {
        self.write_spans(vec![Span::new(text, style)]);
    }

    pub fn write_spans(&mut self, spans: Vec<Span>) {
        self.lines.push(ScreenLine {
            spans,
            ..ScreenLine::default()
        });
    }

    pub fn write_centered(&mut self, text: impl Into<String>, style: TextStyle) {
        self.lines.push(ScreenLine {
            spans: vec![Span::new(text, style)],
            align: Align::Center,
            reveal: Reveal::Instant,
        });
    }

    /// Writes narrative markup, one screen line per wrapped line.
    ///
    /// `prefix` is prepended to each line and `base` fills in the style of
    /// unstyled text.
    pub fn write_markup(
        &mut self,
        prefix: Option<&Span>,
        markup: &str,
        base: TextStyle,
        reveal: Reveal,
    ) {
        for spans in parse_markup(markup) {
            let mut line = Vec::with_capacity(spans.len() + 1);
            line.extend(prefix.cloned());
            line.extend(spans.into_iter().map(|span| Span {
                style: span.style.or(base),
                ..span
            }));
            self.lines.push(ScreenLine {
                spans: line,
                align: Align::Left,
                reveal,
            });
        }
    }

    /// Total characters the typewriter has to reveal.
    pub fn typewriter_len(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.reveal == Reveal::Typewriter)
            .map(ScreenLine::visible_len)
            .sum()
    }

    /// Left padding for a line when rendered `cols` wide.
    pub fn padding_for(&self, line: &ScreenLine) -> usize {
        match line.align {
            Align::Left => 0,
            Align::Center => center_padding(line.visible_len(), self.cols),
        }
    }

    /// Plain-text rendering with centering applied.
    pub fn render_plain(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line.align {
                Align::Left => line.plain_text(),
                Align::Center => center_text(&line.plain_text(), self.cols),
            })
            .collect()
    }

    /// True when any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.plain_text().contains(needle))
    }
}
