mod commands;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "holzliste",
    version,
    about = "Convert a PDF wood cutting list into a sorted Excel sheet"
)]
struct Cli {
    /// Path to the input PDF file
    input_file: PathBuf,

    /// Path to the output file (.xlsx or .json). Defaults to the input name with .xlsx
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    log::info!("-- Starting...");
    if let Err(e) = commands::convert::run(cli.input_file, cli.output) {
        log::info!("-- Exiting...");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    log::info!("-- Done!");
}
