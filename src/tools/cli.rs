//! Command line interface for huffzip.

use std::fmt::{Display, Formatter};

use clap::Parser;
use log::info;

/// Zip or Unzip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command line options, bzip2-flavored.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    huffzip compresses files with a classic single-table Huffman code.
    The frequency table rides along in the output header, so a compressed
    file is self-describing and decompresses without any side channel."
)]
pub struct HuffOpts {
    /// Files to process
    #[clap()]
    pub files: Vec<String>,

    /// Perform compression (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    pub keep: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    pub force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    pub stdout: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

impl HuffOpts {
    /// Compress unless decompression was asked for.
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }
}

/// Parse the command line and wire the verbosity into the logger.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::parse();

    // Set the log level
    match opts.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    // Report the configuration back to the user
    info!("Operational mode set to {}", opts.op_mode());
    info!("Processing {} file(s)", opts.files.len());
    if opts.force {
        info!("Forcing file overwriting")
    };
    if opts.keep {
        info!("Keeping input files")
    };
    if opts.stdout {
        info!("Sending output to stdout")
    };
    opts
}
