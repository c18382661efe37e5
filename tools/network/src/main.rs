use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use sysprobe_hal::report::{classify_interfaces, ignore_broken_pipe, write_network_report};
use sysprobe_hal::LinuxHal;

#[derive(Debug, Parser)]
#[command(name = "network", version)]
#[command(about = "List network interfaces and whether each is wired or wireless")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    sysprobe_hal::logging::init();

    let ifaces = classify_interfaces(&LinuxHal::new()).context("interface scan failed")?;

    let mut out = io::stdout().lock();
    let written = write_network_report(&mut out, &ifaces).and_then(|()| out.flush());
    ignore_broken_pipe(written).context("cannot write interface report")?;
    Ok(())
}
