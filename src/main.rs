//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{error, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::decompress;
use huffzip::tools::cli::{huffopts_init, Mode};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = huffopts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode() {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
