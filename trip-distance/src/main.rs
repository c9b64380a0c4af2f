//! Compute the distance travelled on every trip found in a log of readings.
//!
//! Every line of the input file is `<id><TAB><coordinate>` where the coordinate is one of
//! the JSON shapes known to `tripmeter-formats` (latitude/longitude, n-vector or UTM).
//! Consecutive lines with the same ID form one trip, one line is printed per trip:
//!
//! ```text
//! $ trip-distance trips.txt
//! 1	111.195
//! 2	0.000
//! ```
//!
//! Settings can be given in `$HOME/.config/tripmeter/config.hcl`, flags override them.
//! Any error is fatal and ends with exit status 1.
//!

use std::io::{stdout, BufWriter};

use clap::{crate_authors, crate_version, Parser};
use eyre::Result;
use tracing::{info, trace};

use tripmeter_common::{init_logging, ConfigFile};
use tripmeter_engine::JobBuilder;
use tripmeter_formats::Kind;

use crate::cli::Opts;
use crate::config::Settings;
use crate::output::Printer;

mod cli;
mod config;
mod output;

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();
/// Config tag, shared by all tripmeter tools
const TAG: &str = "tripmeter";

fn version() -> String {
    format!(
        "{}/{} ({} {} {}) by {}",
        NAME,
        VERSION,
        tripmeter_common::version(),
        tripmeter_engine::version(),
        tripmeter_formats::version(),
        AUTHORS
    )
}

/// Usage errors are reported like any other failure, with status 1.
///
fn parse_opts() -> Opts {
    match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code)
        }
    }
}

fn main() -> Result<()> {
    let opts = parse_opts();

    // Exit if needed
    //
    if opts.version {
        println!("{}", version());
        return Ok(());
    }

    if opts.list_formats {
        println!("{}", Kind::list());
        return Ok(());
    }

    let cfg = ConfigFile::<Settings>::load(TAG, opts.config.as_deref())?;
    let source = cfg.source().map(|p| p.display().to_string());
    let cfg = cfg.into_inner().merge(&opts);

    // Initialise logging early
    //
    init_logging(NAME, opts.tree, cfg.debug)?;
    trace!("Logging initialised.");
    if let Some(source) = source {
        info!("Using config {source}");
    }

    let Some(input) = opts.filename else {
        eyre::bail!("No input file");
    };

    let mut job = JobBuilder::default()
        .name(NAME.to_string())
        .input(input)
        .opts(cfg.options())
        .build()?;

    let mut out = Printer::new(BufWriter::new(stdout().lock()), cfg.output, cfg.precision)?;
    let stats = job.run(|t| out.print(&t))?;
    out.finish()?;

    if opts.stats {
        eprintln!("{stats}");
    }
    Ok(())
}
