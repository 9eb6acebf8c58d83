use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use textveil::cli::{decode_message, encode_message, EncodeOptions};

/// Version info from build.rs
const VERSION: &str = env!("TEXTVEIL_VERSION");
const BUILD: &str = env!("TEXTVEIL_BUILD");
const PROFILE: &str = env!("TEXTVEIL_PROFILE");
const GIT_HASH: &str = env!("TEXTVEIL_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING
        .get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "textveil")]
#[command(author, about = "Reversible text obfuscation with replayable metadata", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Obfuscate a message with a random transformation pipeline
    #[command(alias = "e")]
    Encode {
        /// Message to encode
        message: String,

        /// Path to write the pipeline metadata needed for decoding
        #[arg(long)]
        meta: Option<PathBuf>,
    },

    /// Recover a message using previously written metadata
    #[command(alias = "d")]
    Decode {
        /// Encoded message
        encoded: String,

        /// Path to the metadata JSON file
        metadata: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("textveil {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode { message, meta } => {
            let options = EncodeOptions { meta_path: meta };
            encode_message(&message, &options)
        }
        Commands::Decode { encoded, metadata } => decode_message(&encoded, &metadata),
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
