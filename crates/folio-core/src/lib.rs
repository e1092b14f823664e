//! Core library for folio
//!
//! - `cycler`: typewriter state machine and its mounted driver
//! - `scheduler`: single-shot timers (tokio runtime or manual clock)
//! - `profile`: hero section configuration

pub mod cycler;
pub mod profile;
pub mod scheduler;

pub use cycler::{CyclerConfig, CyclerSnapshot, CyclerState, Mode, TextCycler};
pub use profile::{HeroProfile, ProfileError};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
