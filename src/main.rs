use clap::Parser;
use clap::error::ErrorKind;
use console_logger::cli::{self, Cli};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&cli) {
        eprintln!("console-log: {e:#}");
        process::exit(1);
    }
}
