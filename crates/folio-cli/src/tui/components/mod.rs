//! Hero components

pub mod hero;
pub mod typewriter;

pub use hero::HeroView;
