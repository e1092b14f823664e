//! Headless typewriter trace
//!
//! Drives the cycler on a virtual clock and prints one line per tick:
//! `<elapsed ms>\t<mode>\t<text>`. Useful for checking pacing without a terminal.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use folio_core::{CyclerConfig, ManualScheduler, TextCycler};

pub fn write_trace(config: &CyclerConfig, steps: usize, out: &mut impl Write) -> Result<()> {
    let scheduler = Arc::new(ManualScheduler::new());
    let cycler = TextCycler::mount(config, Arc::clone(&scheduler));

    for _ in 0..steps {
        let Some(at) = scheduler.run_next() else {
            break;
        };
        let snapshot = cycler.snapshot();
        writeln!(
            out,
            "{}\t{}\t{}",
            at.as_millis(),
            snapshot.mode,
            snapshot.text
        )?;
    }

    cycler.unmount();
    Ok(())
}
