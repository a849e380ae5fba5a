//! Terminal rendering of a deck and the scrollable viewport over it.
//!
//! The document is flattened into wrapped lines; each line is `line_height` pixels tall, so a
//! section's top offset is its heading row times the line height. The [`Viewport`] implements
//! [`LayoutProvider`] and owns the smooth-scroll animation, which advances one step per
//! [`Viewport::tick`] and is never awaited by whoever started it.

use crate::document::Document;
use crate::layout::{LayoutProvider, ScrollBehavior};
use crate::section::{code_label, title_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What part of the deck a rendered line belongs to.
pub enum LineKind {
    /// Document title.
    DocTitle,
    /// Section heading: code and title.
    Heading,
    /// Section subtitle.
    Subtitle,
    /// Section body text.
    Body,
    /// Heading of a reflection block.
    ReflectionTitle,
    /// One reflection prompt.
    Reflection,
    /// Spacing.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One terminal row of the rendered deck.
pub struct RenderedLine {
    /// Role of the line, used for styling.
    pub kind: LineKind,
    /// Text already wrapped to the render width.
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A deck flattened to rows, with the row at which each section starts.
pub struct RenderedDeck {
    lines: Vec<RenderedLine>,
    tops: Vec<(String, usize)>,
}

impl RenderedDeck {
    #[must_use]
    /// All rows.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    #[must_use]
    /// Row of the heading of section `id`.
    pub fn top_row(&self, id: &str) -> Option<usize> {
        self.tops
            .iter()
            .find(|(section, _)| section == id)
            .map(|&(_, row)| row)
    }

    #[must_use]
    /// Rows occupied by section `id`: its heading row and the row after its last line.
    pub fn section_span(&self, id: &str) -> Option<(usize, usize)> {
        let index = self.tops.iter().position(|(section, _)| section == id)?;
        let top = self.tops[index].1;
        let end = self
            .tops
            .get(index + 1)
            .map_or(self.lines.len(), |&(_, next)| next);
        Some((top, end))
    }

    fn push(&mut self, kind: LineKind, text: &str, width: usize) {
        let wrapped = textwrap::wrap(text, width);
        if wrapped.is_empty() {
            self.blank();
        }
        for piece in wrapped {
            self.lines.push(RenderedLine {
                kind,
                text: piece.into_owned(),
            });
        }
    }

    fn blank(&mut self) {
        self.lines.push(RenderedLine {
            kind: LineKind::Blank,
            text: String::new(),
        });
    }
}

#[must_use]
/// Lays the document out at `width` columns.
pub fn render(document: &Document, width: usize) -> RenderedDeck {
    let width = width.max(1);
    let mut deck = RenderedDeck::default();

    if let Some(title) = &document.title {
        deck.push(LineKind::DocTitle, title, width);
        deck.blank();
    }

    for (order, section) in document.sections.iter().enumerate() {
        if order > 0 {
            deck.blank();
        }
        deck.tops.push((section.id.clone(), deck.lines.len()));

        let code = code_label(section, order);
        let title = title_label(section, order);
        deck.push(LineKind::Heading, &format!("{code} {title}"), width);

        if let Some(subtitle) = &section.subtitle {
            deck.push(LineKind::Subtitle, subtitle, width);
        }

        if !section.body.is_empty() {
            deck.blank();
            for line in section.body.lines() {
                if line.trim().is_empty() {
                    deck.blank();
                } else {
                    deck.push(LineKind::Body, line, width);
                }
            }
        }

        if let Some(reflection) = &section.reflection {
            deck.blank();
            let heading = reflection.title.as_deref().unwrap_or("Reflection");
            deck.push(LineKind::ReflectionTitle, heading, width);
            for item in &reflection.items {
                deck.push(LineKind::Reflection, &format!("• {item}"), width);
            }
        }
    }

    deck
}

#[derive(Clone, Debug)]
/// Scroll state over a rendered deck.
pub struct Viewport {
    deck: RenderedDeck,
    line_height: i64,
    height: usize,
    scroll_row: usize,
    target_row: Option<usize>,
}

impl Viewport {
    #[must_use]
    /// Viewport at the top of `deck`.
    pub fn new(deck: RenderedDeck, line_height: i64) -> Self {
        Self {
            deck,
            line_height: line_height.max(1),
            height: 0,
            scroll_row: 0,
            target_row: None,
        }
    }

    #[must_use]
    /// The rendered deck being scrolled.
    pub fn deck(&self) -> &RenderedDeck {
        &self.deck
    }

    /// Swaps in a new rendering, keeping the scroll row where the new deck allows it.
    pub fn set_deck(&mut self, deck: RenderedDeck) {
        self.deck = deck;
        self.clamp();
    }

    /// Sets the number of visible rows.
    pub fn set_height(&mut self, rows: usize) {
        self.height = rows;
        self.clamp();
    }

    #[must_use]
    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    /// First visible row.
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    #[must_use]
    /// Largest reachable first row.
    pub fn max_scroll(&self) -> usize {
        self.deck.lines.len().saturating_sub(self.height)
    }

    #[must_use]
    /// Whether a smooth scroll is still in flight.
    pub fn is_animating(&self) -> bool {
        self.target_row.is_some()
    }

    #[must_use]
    /// Rows currently on screen.
    pub fn visible(&self) -> &[RenderedLine] {
        let lines = self.deck.lines();
        let start = self.scroll_row.min(lines.len());
        let end = (start + self.height).min(lines.len());
        &lines[start..end]
    }

    /// User scroll by `delta` rows. Cancels any animation; returns whether the position moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let row = self.scroll_row.saturating_add_signed(delta);
        self.jump_to_row(row)
    }

    /// User jump to `row`. Cancels any animation; returns whether the position moved.
    pub fn jump_to_row(&mut self, row: usize) -> bool {
        self.target_row = None;
        let before = self.scroll_row;
        self.scroll_row = row.min(self.max_scroll());
        self.scroll_row != before
    }

    /// Advances a smooth scroll by one ease-out step. Returns whether the position moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target_row else {
            return false;
        };
        let before = self.scroll_row;
        let distance = target.abs_diff(before);
        let step = distance.div_ceil(4).max(1);
        self.scroll_row = if target > before {
            (before + step).min(target)
        } else {
            before.saturating_sub(step).max(target)
        };
        if self.scroll_row == target {
            self.target_row = None;
        }
        self.scroll_row != before
    }

    /// First row at or below `px`, so a scroll target never lands above the requested offset.
    fn row_for(&self, px: i64) -> usize {
        let px = u64::try_from(px).unwrap_or(0);
        let line_height = u64::try_from(self.line_height).unwrap_or(1);
        usize::try_from(px.div_ceil(line_height))
            .unwrap_or(usize::MAX)
            .min(self.max_scroll())
    }

    fn px_for(&self, row: usize) -> i64 {
        i64::try_from(row)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.line_height)
    }

    fn clamp(&mut self) {
        let max = self.max_scroll();
        self.scroll_row = self.scroll_row.min(max);
        if let Some(target) = self.target_row.as_mut() {
            *target = (*target).min(max);
        }
    }
}

impl LayoutProvider for Viewport {
    fn section_top(&self, id: &str) -> Option<i64> {
        self.deck.top_row(id).map(|row| self.px_for(row))
    }

    fn scroll_position(&self) -> i64 {
        self.px_for(self.scroll_row)
    }

    fn scroll_to(&mut self, top: i64, behavior: ScrollBehavior) {
        let row = self.row_for(top);
        match behavior {
            ScrollBehavior::Instant => {
                self.target_row = None;
                self.scroll_row = row;
            }
            ScrollBehavior::Smooth => {
                self.target_row = (row != self.scroll_row).then_some(row);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
