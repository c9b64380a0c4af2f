use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

use tripmeter_formats::Formula;

use crate::output::{Output, MAX_PRECISION};

#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// Alternate configuration file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Debug mode, report every rejected format.
    #[clap(short = 'D', long)]
    pub debug: bool,
    /// Output format (text, csv, json).
    #[clap(short = 'F', long)]
    pub format: Option<Output>,
    /// Distance formula (haversine, cosines).
    #[clap(short = 'f', long)]
    pub formula: Option<Formula>,
    /// List the coordinate formats recognised in input files.
    #[clap(short = 'L', long)]
    pub list_formats: bool,
    /// Number of decimals for distances (0 to 17).
    #[clap(short = 'p', long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    pub precision: Option<u8>,
    /// Print run statistics on stderr.
    #[clap(short = 'S', long)]
    pub stats: bool,
    /// Hierarchical log output.
    #[clap(long)]
    pub tree: bool,
    /// Display utility full version.
    #[clap(short = 'V', long)]
    pub version: bool,
    /// Input file, one `<id><TAB><coordinate>` per line.
    #[clap(required_unless_present_any = ["version", "list_formats"])]
    pub filename: Option<PathBuf>,
}
