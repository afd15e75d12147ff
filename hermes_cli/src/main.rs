use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::decode_route::DecodeRouteArgs;

mod decode_route;
mod file_utils;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode saved TomTom calculate-route replies
    #[command(visible_alias = "d")]
    DecodeRoute {
        #[command(flatten)]
        args: DecodeRouteArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::DecodeRoute { args }) => decode_route::run(args)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
