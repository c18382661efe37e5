use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use sysprobe_hal::report::{ignore_broken_pipe, reportable_drives, write_drive_report};
use sysprobe_hal::LinuxHal;

#[derive(Debug, Parser)]
#[command(name = "drives", version)]
#[command(about = "List whole disks under /dev with type, model and size")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    sysprobe_hal::logging::init();

    let hal = LinuxHal::new();
    log::debug!(
        "scanning {} with metadata from {}",
        hal.dev_dir().display(),
        hal.sys_block_dir().display()
    );
    let drives = reportable_drives(&hal).context("drive scan failed")?;

    let mut out = io::stdout().lock();
    let written = write_drive_report(&mut out, &drives).and_then(|()| out.flush());
    ignore_broken_pipe(written).context("cannot write drive report")?;
    Ok(())
}
