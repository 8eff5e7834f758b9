//! # dbrowse
//!
//! Main entry point for the disk image browser.

use dbrowse::{logger, parse_args};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dbrowse");

    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage(program);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            process::exit(1);
        }
    };

    // parse_args has already validated the level
    let level = config.level_filter().unwrap_or(log::LevelFilter::Warn);
    if let Err(e) = logger::init(level) {
        eprintln!("Failed to install logger: {}", e);
    }

    if let Err(e) = dbrowse::run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] [IMAGE]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --image <PATH>       Disk image to browse (default: disk.img)");
    eprintln!("  -s, --script <FILE>      Run commands from a file instead of stdin");
    eprintln!("  -c, --config <FILE>      JSON configuration file");
    eprintln!("  --log-level <LEVEL>      off, error, warn (default), info, debug, trace");
    eprintln!("  --no-stats               Do not print read statistics on exit");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} floppy.img", program);
    eprintln!("  {} --image floppy.img --script walk.txt --no-stats", program);
}
