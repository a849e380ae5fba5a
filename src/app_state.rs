//! The state machine bridging the deck, the gate and the terminal viewport.
//!
//! `AppState` is the host for the core components. It turns user input into deck events,
//! carries out the effects the deck returns, and keeps descriptors in step with the rendering:
//! whenever the document is re-rendered (resize, hydrated content) the descriptors are re-read
//! from the document, re-measured against the viewport and handed back to the deck.
//!
//! Nothing is measured until the first [`AppState::fit`] has given the viewport its real size.
//! A deck revealed before that is mounted by the first fit.

use crate::config::Config;
use crate::controller::{Deck, DeckSettings, Effect, Event};
use crate::document::Document;
use crate::gate::{AccessGate, GateOutcome, SessionStore};
use crate::hydrate::{self, SectionContent};
use crate::layout::{measure, LayoutProvider, ScrollBehavior};
use crate::location::Location;
use crate::section::{describe, SectionDescriptor};
use crate::viewport::{render, Viewport};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Determines which screen renders and how input is interpreted.
pub enum View {
    /// Credential prompt; the deck stays hidden.
    Gate,
    /// The deck with its TOC.
    Deck,
}

/// Bridges the deck controller and the terminal, holding everything a frame needs.
pub struct AppState<S: SessionStore> {
    /// Active screen.
    pub view: View,
    /// Deck content, rewritten in place by hydration.
    pub document: Document,
    /// TOC and active-section state.
    pub deck: Deck,
    /// Scrollable rendering of the document.
    pub viewport: Viewport,
    /// Shareable location shown in the status line.
    pub location: Location,
    /// Access gate, absent when no credential is configured.
    pub gate: Option<AccessGate<S>>,
    /// Characters typed at the gate prompt.
    pub gate_input: String,
    /// Inline gate feedback.
    pub gate_message: Option<String>,
    /// Status feedback shown in the help bar.
    pub message: Option<String>,
    /// Maximum render width in columns.
    pub wrap_width: usize,
    render_width: usize,
    laid_out: bool,
}

impl<S: SessionStore> AppState<S> {
    #[must_use]
    /// Initialises state; reveals the deck straight away when there is no gate or the session
    /// is already unlocked.
    pub fn new(
        document: Document,
        cfg: &Config,
        location: Location,
        gate: Option<AccessGate<S>>,
    ) -> Self {
        let render_width = cfg.wrap_width;
        let viewport = Viewport::new(render(&document, render_width), cfg.line_height);
        let mut state = Self {
            view: View::Gate,
            document,
            deck: Deck::new(DeckSettings::from(cfg)),
            viewport,
            location,
            gate,
            gate_input: String::new(),
            gate_message: None,
            message: None,
            wrap_width: cfg.wrap_width,
            render_width,
            laid_out: false,
        };
        if state.gate.as_ref().is_none_or(AccessGate::is_unlocked) {
            state.reveal();
        }
        state
    }

    #[must_use]
    /// Whether the deck view has a TOC sidebar. Hydration never adds or removes sections, so
    /// this holds from load onwards, gate included.
    pub fn has_toc(&self) -> bool {
        !self.document.sections.is_empty()
    }

    #[must_use]
    /// Whether the deck is visible.
    pub fn is_revealed(&self) -> bool {
        self.view == View::Deck
    }

    /// Re-reads descriptors from the document and measures them against the viewport.
    #[must_use]
    pub fn descriptors(&self) -> Vec<SectionDescriptor> {
        let mut sections = describe(&self.document.sections);
        measure(&mut sections, &self.viewport);
        sections
    }

    /// Submits the typed credential to the gate.
    pub fn submit_gate(&mut self) {
        let Some(gate) = self.gate.as_mut() else {
            return;
        };
        match gate.submit(&self.gate_input) {
            GateOutcome::Unlocked | GateOutcome::AlreadyUnlocked => {
                self.gate_input.clear();
                self.gate_message = None;
                self.reveal();
            }
            GateOutcome::Rejected(message) => {
                self.gate_input.clear();
                self.gate_message = Some(message.to_string());
            }
        }
    }

    /// Shows the deck and mounts the TOC. Only the first call has any effect.
    ///
    /// Offsets are measured at mount rather than at load, since hidden content has no layout.
    /// Before the first [`Self::fit`] the mount waits for it.
    pub fn reveal(&mut self) {
        if self.view == View::Deck {
            return;
        }
        self.view = View::Deck;
        if self.laid_out {
            self.mount();
        }
    }

    /// Fits the rendering to the document pane, re-measuring when the width changes.
    pub fn fit(&mut self, width: usize, height: usize) {
        let before = self.viewport.scroll_position();
        self.viewport.set_height(height);
        let width = width.min(self.wrap_width).max(1);
        if width != self.render_width {
            self.render_width = width;
            self.relayout();
        } else if self.viewport.scroll_position() != before {
            self.on_scroll();
        }

        if !self.laid_out {
            self.laid_out = true;
            if self.view == View::Deck {
                self.mount();
            }
        }
    }

    /// Applies hydrated content and refreshes labels and offsets.
    pub fn apply_content(&mut self, records: &[SectionContent]) {
        let applied = hydrate::apply(&mut self.document, records);
        info!(applied, "applied hydrated content");
        if applied > 0 {
            self.relayout();
        }
    }

    /// Clicks TOC entry `index`.
    pub fn click(&mut self, index: usize) {
        self.dispatch(Event::Click(index));
    }

    /// Clicks the entry after the active one.
    pub fn click_next(&mut self) {
        if let Some(index) = self.active_index() {
            self.click(index + 1);
        }
    }

    /// Clicks the entry before the active one.
    pub fn click_prev(&mut self) {
        if let Some(index) = self.active_index() {
            if index > 0 {
                self.click(index - 1);
            }
        }
    }

    /// User scroll by `rows`.
    pub fn scroll_by(&mut self, rows: isize) {
        if self.viewport.scroll_by(rows) {
            self.on_scroll();
        }
    }

    /// User jump to the top (`false`) or bottom (`true`).
    pub fn jump(&mut self, to_end: bool) {
        let row = if to_end { self.viewport.max_scroll() } else { 0 };
        if self.viewport.jump_to_row(row) {
            self.on_scroll();
        }
    }

    /// Advances any in-flight smooth scroll by one frame.
    pub fn tick(&mut self) {
        if self.viewport.tick() {
            self.on_scroll();
        }
    }

    fn active_index(&self) -> Option<usize> {
        self.deck.navigation()?.active_index()
    }

    fn on_scroll(&mut self) {
        let scroll_y = self.viewport.scroll_position();
        self.dispatch(Event::Scroll(scroll_y));
    }

    /// A location fragment naming a section jumps there flush before the eager sync.
    fn mount(&mut self) {
        if self.deck.is_mounted() {
            return;
        }
        if let Some(fragment) = self.location.fragment() {
            match self.viewport.section_top(fragment) {
                Some(top) => self.viewport.scroll_to(top, ScrollBehavior::Instant),
                None => debug!(fragment, "fragment matches no section"),
            }
        }

        let sections = self.descriptors();
        let scroll_y = self.viewport.scroll_position();
        info!(sections = sections.len(), "mounting table of contents");
        self.dispatch(Event::Mount { sections, scroll_y });
    }

    /// Active section and how far into it the view starts, in rows.
    fn anchor(&self) -> Option<(String, usize)> {
        if self.viewport.is_animating() {
            return None;
        }
        let id = self.deck.active_section()?.id.clone();
        let top = self.viewport.deck().top_row(&id)?;
        let offset = self.viewport.scroll_row().saturating_sub(top);
        Some((id, offset))
    }

    /// Re-renders at the current width and keeps the active section where the reader left it.
    fn relayout(&mut self) {
        let anchor = self.anchor();
        self.viewport
            .set_deck(render(&self.document, self.render_width));
        if let Some((id, offset)) = anchor {
            if let Some((top, end)) = self.viewport.deck().section_span(&id) {
                let last = end.saturating_sub(1).max(top);
                self.viewport.jump_to_row((top + offset).min(last));
            }
        }
        let sections = self.descriptors();
        let scroll_y = self.viewport.scroll_position();
        self.dispatch(Event::ContentChanged { sections, scroll_y });
    }

    fn dispatch(&mut self, event: Event) {
        let before = self.viewport.scroll_position();
        for effect in self.deck.handle(event) {
            match effect {
                Effect::ScrollTo { top, behavior } => self.viewport.scroll_to(top, behavior),
                Effect::ReplaceFragment(id) => self.location.replace_fragment(id),
            }
        }
        if self.viewport.scroll_position() != before {
            self.on_scroll();
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
