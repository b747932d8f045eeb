use std::path::PathBuf;

use clap::Parser;

/// Meeting manager: create, list and organise meetings stored in a JSON file.
#[derive(Parser, Debug)]
#[command(name = "meetings", version, about)]
struct Args {
    /// Meeting data file
    #[arg(short, long, env = "MEETINGS_FILE", default_value = "data.json")]
    file: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    meetings::cli::run(&args.file);
}
