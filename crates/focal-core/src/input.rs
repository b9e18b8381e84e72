//! Navigation commands produced by the host's key dispatch.

/// Logical commands consumed by the reader session.
///
/// Quitting is a host concern and never reaches the core.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Advance,
    Retreat,
}
