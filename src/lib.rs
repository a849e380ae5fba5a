//! decktoc: a scroll-synchronised table of contents for long-form markdown decks.
//!
//! The core is small. [`section`] derives descriptors from the deck, [`toc`] mirrors them as a
//! navigation list and handles clicks, and [`sync`] maps the scroll position onto the active
//! entry. [`controller::Deck`] ties them together behind an event/effect interface, with layout
//! supplied through [`layout::LayoutProvider`]. The access gate ([`gate`]) and remote content
//! ([`hydrate`]) sit around that core, and the terminal front end lives in [`app_state`],
//! [`viewport`] and [`ui`].

pub mod app_state;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod formats;
pub mod gate;
pub mod hydrate;
pub mod input;
pub mod layout;
pub mod location;
pub mod nav;
pub mod section;
pub mod sync;
pub mod toc;
pub mod ui;
pub mod viewport;
