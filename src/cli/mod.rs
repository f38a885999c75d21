mod args;
mod config;
mod global;
mod handlers;

use args::Command;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base58check")]
#[command(version)]
#[command(about = "Base58 and Base58Check encoding with configurable alphabets and checksums", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalArgs,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Command::Int { action } => handlers::int::handle(action, &registry),
        Command::Config { action } => handlers::config::handle(action, &registry),
    }
}
