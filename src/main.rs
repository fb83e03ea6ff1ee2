use std::io;

use clap::Parser;

use pcaplens::cli::{Cli, Command};
use pcaplens::error::PcapLensError;
use pcaplens::model::stats;
use pcaplens::{analyze, output};

/// Exit codes: 0 success, 2 unreadable/malformed capture file, 4 other fatal.
fn exit_code(err: &PcapLensError) -> i32 {
    match err {
        PcapLensError::Io(_) | PcapLensError::BadMagic(_) | PcapLensError::InvalidFormat(_) => 2,
        PcapLensError::Serialization(_) => 4,
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> Result<(), PcapLensError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Frames(args) => {
            let frames = analyze::analyze_pcap(&args.file)?;
            output::write_frames(&frames, args.format, &mut out)
        }
        Command::Packets(args) => {
            let packets = analyze::analyze_ipv4_filtered(&args.file, &args.criteria())?;
            if args.stats {
                let dist = stats::distributions(&packets);
                output::write_distributions(&dist, args.format, &mut out)
            } else {
                output::write_packets(&packets, args.format, &mut out)
            }
        }
    }
}
