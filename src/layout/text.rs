use crate::units::{Pt, EM_FONT_SIZE};

/// Number of spaces a tab expands to
const TABSIZE: f64 = 4.0;

/// Slack allowed when comparing accumulated line widths and heights
const EPSILON: f64 = 1e-6;

/// Typographic attributes of a run of text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: Pt,
    /// Line height as a multiple of the font size
    pub leading: f64,
    /// Horizontal offset of the first line of every paragraph
    pub first_line_indent: Pt,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_size: EM_FONT_SIZE,
            leading: 1.2,
            first_line_indent: Pt::ZERO,
        }
    }
}

impl TextStyle {
    pub fn new(font_size: Pt, leading: f64) -> TextStyle {
        TextStyle {
            font_size,
            leading,
            first_line_indent: Pt::ZERO,
        }
    }

    pub fn with_first_line_indent(mut self, indent: Pt) -> TextStyle {
        self.first_line_indent = indent;
        self
    }

    pub fn line_height(&self) -> Pt {
        self.font_size * self.leading
    }
}

/// A string sharing a single [`TextStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new<S: Into<String>>(text: S, style: TextStyle) -> TextRun {
        TextRun {
            text: text.into(),
            style,
        }
    }
}

/// Position inside a [`StyledText`]: a run index and a byte offset into that
/// run's text. A cursor past the last run marks the end of the text.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextCursor {
    pub run: usize,
    pub offset: usize,
}

/// An ordered list of styled runs; the content of a text container.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyledText {
    runs: Vec<TextRun>,
}

impl StyledText {
    pub fn new() -> StyledText {
        StyledText::default()
    }

    /// Text made of a single run
    pub fn plain<S: Into<String>>(text: S, style: TextStyle) -> StyledText {
        let mut styled = StyledText::new();
        styled.push(TextRun::new(text, style));
        styled
    }

    /// A single space at hair size with no indent. Placed in front of text
    /// that continues in another column so that the continuation does not pick
    /// up the first-line indent of a new paragraph.
    pub fn column_spacer(style: TextStyle) -> TextRun {
        TextRun::new(
            " ",
            TextStyle {
                font_size: Pt(0.01),
                first_line_indent: Pt::ZERO,
                ..style
            },
        )
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Append a run; empty runs are dropped
    pub fn push(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    pub fn push_str<S: Into<String>>(&mut self, text: S, style: TextStyle) {
        self.push(TextRun::new(text, style));
    }

    pub fn prepend(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.runs.insert(0, run);
        }
    }

    /// Move all runs of `other` to the end of this text
    pub fn append(&mut self, mut other: StyledText) {
        self.runs.append(&mut other.runs);
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Number of characters over all runs
    pub fn char_count(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }

    /// Concatenation of all runs without styling
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// The cursor just past the last character
    pub fn end(&self) -> TextCursor {
        TextCursor {
            run: self.runs.len(),
            offset: 0,
        }
    }

    /// Copy of everything from `cursor` to the end
    pub fn tail(&self, cursor: TextCursor) -> StyledText {
        let mut tail = StyledText::new();
        if let Some(run) = self.runs.get(cursor.run) {
            tail.push(TextRun::new(&run.text[cursor.offset..], run.style));
        }
        for run in self.runs.iter().skip(cursor.run + 1) {
            tail.push(run.clone());
        }
        tail
    }

    /// Drop everything from `cursor` onwards
    pub fn truncate(&mut self, cursor: TextCursor) {
        if cursor.run >= self.runs.len() {
            return;
        }
        self.runs.truncate(cursor.run + 1);
        if let Some(run) = self.runs.last_mut() {
            run.text.truncate(cursor.offset);
        }
        self.runs.retain(|run| !run.text.is_empty());
    }

    /// Split into the part before `cursor` and the part from `cursor` on
    pub fn split_at(&self, cursor: TextCursor) -> (StyledText, StyledText) {
        let mut head = self.clone();
        head.truncate(cursor);
        (head, self.tail(cursor))
    }

    /// Rendered height of the text wrapped to `width`
    pub fn height<M: TextMetrics + ?Sized>(&self, width: Pt, metrics: &M) -> Pt {
        text_height(&layout_lines(self, width, metrics))
    }

    /// Split into the lines that fit in `height` when wrapped to `width`, and
    /// the remainder. The remainder is empty when everything fits.
    pub fn split_at_height<M: TextMetrics + ?Sized>(
        &self,
        width: Pt,
        height: Pt,
        metrics: &M,
    ) -> (StyledText, StyledText) {
        let lines = layout_lines(self, width, metrics);
        match overflow_cursor(&lines, height) {
            Some(cursor) => self.split_at(cursor),
            None => (self.clone(), StyledText::new()),
        }
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        StyledText::plain(value, TextStyle::default())
    }
}

/// Font measurements needed to wrap text and place baselines. Supplied by
/// whatever font backend is attached; [`FixedMetrics`] approximates one.
pub trait TextMetrics {
    /// Horizontal advance of `ch`
    fn advance(&self, ch: char, style: &TextStyle) -> Pt;

    /// Height above the baseline of the tallest glyphs
    fn ascender(&self, style: &TextStyle) -> Pt;

    /// Depth below the baseline, as a positive length
    fn descender(&self, style: &TextStyle) -> Pt;

    fn cap_height(&self, style: &TextStyle) -> Pt;

    fn x_height(&self, style: &TextStyle) -> Pt;

    fn line_height(&self, style: &TextStyle) -> Pt {
        style.line_height()
    }
}

/// Proportions of a generic text face, as fractions of the font size. Every
/// glyph has the same advance except spaces and zero-width characters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedMetrics {
    pub advance: f64,
    pub space: f64,
    pub ascender: f64,
    pub descender: f64,
    pub cap_height: f64,
    pub x_height: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        FixedMetrics {
            advance: 0.5,
            space: 0.25,
            ascender: 0.8,
            descender: 0.2,
            cap_height: 0.7,
            x_height: 0.5,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn advance(&self, ch: char, style: &TextStyle) -> Pt {
        match ch {
            '\n' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => Pt::ZERO,
            ' ' | '\u{00A0}' => style.font_size * self.space,
            _ => style.font_size * self.advance,
        }
    }

    fn ascender(&self, style: &TextStyle) -> Pt {
        style.font_size * self.ascender
    }

    fn descender(&self, style: &TextStyle) -> Pt {
        style.font_size * self.descender
    }

    fn cap_height(&self, style: &TextStyle) -> Pt {
        style.font_size * self.cap_height
    }

    fn x_height(&self, style: &TextStyle) -> Pt {
        style.font_size * self.x_height
    }
}

/// One wrapped line. Vertical positions are measured down from the top of
/// the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub start: TextCursor,
    pub end: TextCursor,
    /// Advance width, without trailing whitespace
    pub width: Pt,
    pub top: Pt,
    pub height: Pt,
    pub baseline: Pt,
    pub ascender: Pt,
    pub descender: Pt,
    pub cap_height: Pt,
    pub x_height: Pt,
}

impl TextLine {
    pub fn bottom(&self) -> Pt {
        self.top + self.height
    }

    /// Vertical position of the top of capitals
    pub fn cap_line(&self) -> Pt {
        self.baseline - self.cap_height
    }

    /// Vertical position of the top of lower-case letters
    pub fn x_line(&self) -> Pt {
        self.baseline - self.x_height
    }
}

/// A character of the input with its position and measured advance.
struct Glyph {
    cursor: TextCursor,
    ch: char,
    advance: Pt,
    style: TextStyle,
}

fn glyphs<M: TextMetrics + ?Sized>(text: &StyledText, metrics: &M) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(text.char_count());
    for (run_idx, run) in text.runs().iter().enumerate() {
        let mut chars = run.text.char_indices().peekable();
        while let Some((offset, ch)) = chars.next() {
            // normalize newlines
            let ch = match ch {
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => continue,
                '\r' => '\n',
                ch => ch,
            };
            let advance = if ch == '\t' {
                metrics.advance(' ', &run.style) * TABSIZE
            } else {
                metrics.advance(ch, &run.style)
            };
            glyphs.push(Glyph {
                cursor: TextCursor {
                    run: run_idx,
                    offset,
                },
                ch,
                advance,
                style: run.style,
            });
        }
    }
    glyphs
}

/// Wrap `text` to `width`.
///
/// Lines break at the latest whitespace that still fits. Whitespace itself
/// never causes a break; it hangs past the end of the line, so wrapped lines
/// never start with it. A word wider than the line is broken at the last
/// character that fits, and every line holds at least one character. Hard
/// newlines (`\n`, `\r\n`, `\r`) start a new paragraph, whose first line is
/// indented by the style of its first character.
pub fn layout_lines<M: TextMetrics + ?Sized>(
    text: &StyledText,
    width: Pt,
    metrics: &M,
) -> Vec<TextLine> {
    let glyphs = glyphs(text, metrics);
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    let indent = |at: usize| {
        glyphs
            .get(at)
            .map(|g| g.style.first_line_indent)
            .unwrap_or_default()
    };

    let mut line_start = 0usize;
    let mut x = indent(0);
    // index of the first glyph after the most recent whitespace on this line
    let mut last_break: Option<usize> = None;
    let mut i = 0usize;

    while i < glyphs.len() {
        let glyph = &glyphs[i];

        if glyph.ch == '\n' {
            ranges.push((line_start, i));
            i += 1;
            line_start = i;
            x = indent(i);
            last_break = None;
            continue;
        }

        let whitespace = glyph.ch.is_whitespace();
        if !whitespace && i > line_start && (x + glyph.advance).0 > width.0 + EPSILON {
            let break_at = last_break.filter(|&b| b > line_start).unwrap_or(i);
            ranges.push((line_start, break_at));
            line_start = break_at;
            i = break_at;
            x = Pt::ZERO;
            last_break = None;
            continue;
        }

        x += glyph.advance;
        if whitespace {
            last_break = Some(i + 1);
        }
        i += 1;
    }
    if line_start < glyphs.len() {
        ranges.push((line_start, glyphs.len()));
    }

    let cursor_at = |idx: usize| {
        glyphs
            .get(idx)
            .map(|g| g.cursor)
            .unwrap_or_else(|| text.end())
    };

    let mut top = Pt::ZERO;
    let mut lines = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        let on_line = &glyphs[start..end];
        let styles: Vec<TextStyle> = if on_line.is_empty() {
            // an empty paragraph takes the style of its newline
            glyphs.get(end).map(|g| g.style).into_iter().collect()
        } else {
            on_line.iter().map(|g| g.style).collect()
        };
        let height = tallest(&styles, |s| metrics.line_height(s));
        let ascender = tallest(&styles, |s| metrics.ascender(s));
        let descender = tallest(&styles, |s| metrics.descender(s));
        let cap_height = tallest(&styles, |s| metrics.cap_height(s));
        let x_height = tallest(&styles, |s| metrics.x_height(s));

        let visible = on_line
            .iter()
            .rposition(|g| !g.ch.is_whitespace())
            .map_or(0, |last| last + 1);
        let mut line_width: Pt = on_line[..visible].iter().map(|g| g.advance).sum();
        if start == 0 || glyphs.get(start - 1).is_some_and(|g| g.ch == '\n') {
            line_width += indent(start);
        }

        lines.push(TextLine {
            start: cursor_at(start),
            end: cursor_at(end),
            width: line_width,
            top,
            height,
            baseline: top + height - descender,
            ascender,
            descender,
            cap_height,
            x_height,
        });
        top += height;
    }
    lines
}

fn tallest(styles: &[TextStyle], measure: impl Fn(&TextStyle) -> Pt) -> Pt {
    styles.iter().map(measure).fold(Pt::ZERO, Pt::max)
}

/// Total height of wrapped lines
pub fn text_height(lines: &[TextLine]) -> Pt {
    lines.iter().map(|line| line.height).sum()
}

/// Start of the first line that doesn't fit in `height`, or `None` if all do
pub fn overflow_cursor(lines: &[TextLine], height: Pt) -> Option<TextCursor> {
    lines
        .iter()
        .find(|line| line.bottom().0 > height.0 + EPSILON)
        .map(|line| line.start)
}
