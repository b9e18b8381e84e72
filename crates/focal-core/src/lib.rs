//! Navigation and windowed-preview engine for RSVP reading.
//!
//! The crate is a pure state machine: a host hands it an already-tokenized
//! [`content::WordSequence`], drives it with [`input::InputEvent`] commands,
//! and pulls a borrowed [`render::Screen`] view model after every command.
//! No I/O, no terminal types, no clipboard access lives here.

pub mod app;
pub mod content;
pub mod input;
pub mod orp;
pub mod position;
pub mod render;
pub mod window;
