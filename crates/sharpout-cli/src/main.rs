//! Sharpout CLI
//!
//! Renders JSON-serialized C# syntax trees to source text

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use sharpout_core::{Preset, Result, init_tracing};
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "sharpout")]
#[command(about = "sharpout: policy-driven printer for C# syntax trees")]
#[command(version = sharpout_core::VERSION)]
#[command(
    long_about = "sharpout renders C# syntax trees, serialized as JSON by an external parser,\n\
back to source text. Brace placement, spacing and blank lines follow a formatting policy\n\
built from a preset and an optional configuration file.\n\
\n\
Examples:\n  \
sharpout print Program.ast.json          # Print to stdout\n  \
sharpout print --write trees/            # Write a .cs file next to every tree\n  \
sharpout print --check --preset kr src/  # Verify existing .cs files\n  \
sharpout map Program.ast.json            # Show node/offset map as JSON\n  \
sharpout config init                     # Create a configuration file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.sharpoutrc.json/.sharpoutrc.toml/sharpout.yaml)"
    )]
    config: Option<PathBuf>,

    /// Preset overriding the configured one
    #[arg(long, global = true, value_enum, help = "Formatting preset to start from")]
    preset: Option<PresetArg>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Number of threads to use for parallel processing
    #[arg(
        short = 'j',
        long,
        global = true,
        help = "Number of threads (default: number of CPU cores)"
    )]
    threads: Option<usize>,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render syntax trees to C# source
    #[command(alias = "fmt")]
    Print {
        /// Tree files or directories
        #[arg(
            required = true,
            help = "JSON tree files, or directories searched for *.ast.json"
        )]
        inputs: Vec<PathBuf>,

        /// Write `<name>.cs` next to each input
        #[arg(long, help = "Write a .cs file next to each input instead of printing")]
        write: bool,

        /// Compare with existing `.cs` files
        #[arg(
            long,
            help = "Check that existing .cs files match the rendered output",
            conflicts_with = "write"
        )]
        check: bool,
    },

    /// Print the node-to-text map of a tree as JSON
    Map {
        /// Tree file
        #[arg(help = "JSON tree file")]
        input: PathBuf,

        /// Include the rendered text alongside the spans
        #[arg(long, help = "Include the rendered text in the output")]
        with_text: bool,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(help = "Path to configuration file (default: search for .sharpoutrc)")]
        path: Option<PathBuf>,
    },

    /// Show current configuration
    Show {
        /// Show the formatting policy the configuration resolves to
        #[arg(long, help = "Show the resolved formatting policy")]
        resolved: bool,
    },

    /// Print the JSON Schema for configuration files
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long, help = "Output file for the schema")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    /// Every brace on its own line
    Allman,
    /// Opening braces on the header line
    Kr,
    /// Mono coding guidelines
    Mono,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Allman => Preset::Allman,
            PresetArg::Kr => Preset::Kr,
            PresetArg::Mono => Preset::Mono,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFormat {
    /// JSON configuration format
    Json,
    /// TOML configuration format
    Toml,
    /// YAML configuration format
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return Ok(());
    }

    if !cli.no_color && std::env::var("NO_COLOR").is_err() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "sharpout=error",
        1 => "sharpout=warn",
        2 => "sharpout=info",
        3 => "sharpout=debug",
        _ => "sharpout=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    if let Some(threads) = cli.threads
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
    {
        error!("Failed to set thread pool size: {}", e);
        std::process::exit(1);
    }

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("sharpout failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    let preset = cli.preset.map(Preset::from);
    match cli.command {
        Some(Commands::Print {
            inputs,
            write,
            check,
        }) => {
            let mode = if check {
                commands::PrintMode::Check
            } else if write {
                commands::PrintMode::Write
            } else {
                commands::PrintMode::Stdout
            };
            commands::print_command(inputs, mode, cli.config, preset)
        }

        Some(Commands::Map { input, with_text }) => {
            commands::map_command(input, with_text, cli.config, preset)
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => {
                commands::config_init_command(format, force, preset)
            }
            ConfigAction::Validate { path } => commands::config_validate_command(path),
            ConfigAction::Show { resolved } => {
                commands::config_show_command(resolved, cli.config, preset)
            }
            ConfigAction::Schema { output } => commands::config_schema_command(output),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("sharpout {}", sharpout_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
                println!(
                    "  Rust version: {}",
                    option_env!("CARGO_PKG_RUST_VERSION").unwrap_or("unknown")
                );
                if let Ok(profile) = std::env::var("PROFILE") {
                    println!("  Profile: {profile}");
                }
            } else {
                println!("{}", sharpout_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
