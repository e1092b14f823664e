//! Animation system for the folio TUI
//!
//! The typewriter itself is driven by `folio_core::TextCycler`; this module
//! only holds frame-rate animations ticked by the event loop.

pub mod cursor;

pub use cursor::CursorBlink;
