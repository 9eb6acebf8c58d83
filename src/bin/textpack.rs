//! One-shot compress-and-encode utility, independent of the stepped pipeline.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use textveil::packed;

#[derive(Parser)]
#[command(name = "textpack")]
#[command(author, about = "Compress text with zlib and encode as URL-safe base64", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress and encode text
    Encode {
        /// Text to encode
        text: String,
    },

    /// Decode and decompress text
    Decode {
        /// Encoded text to decode
        data: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode { text } => packed::pack(&text),
        Commands::Decode { data } => packed::unpack(&data),
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
