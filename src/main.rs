mod boot;
mod colors;
mod config;
mod content;
mod globe;
mod help;
mod netinfo;
mod settings;
mod shell;
mod terminal;
mod timer;

use clap::{Parser, Subcommand};
use config::{GlobeConfig, ProfileOverride, Section, ShellConfig};
use std::io;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(author = "Portfolio Terminal")]
#[command(version = "0.2.0")]
#[command(about = "Terminal portfolio OS: boot sequence, shell desktop and a live pixel globe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot into the portfolio desktop (default)
    Run {
        /// Skip the boot sequence
        #[arg(long)]
        no_boot: bool,

        /// Section to open first: about, projects, skills, resume, contact
        #[arg(short = 'S', long, default_value = "about")]
        section: String,

        /// Layout profile: auto, compact, wide
        #[arg(short, long, default_value = "auto")]
        profile: String,

        /// Frame delay in seconds
        #[arg(short, long, default_value = "0.05")]
        time: f32,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the network lookup (placeholder values)
        #[arg(long)]
        no_fetch: bool,
    },

    /// Jump straight to the network globe
    Globe {
        /// Layout profile: auto, compact, wide
        #[arg(short, long, default_value = "auto")]
        profile: String,

        /// Frame delay in seconds
        #[arg(short, long, default_value = "0.05")]
        time: f32,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the network lookup (placeholder values)
        #[arg(long)]
        no_fetch: bool,
    },
}

fn parse_section(name: &str) -> Section {
    match Section::from_name(&name.to_lowercase()) {
        Some(section) => section,
        None => {
            eprintln!("Unknown section: {}. Using about.", name);
            eprintln!("Available: about, projects, skills, resume, contact");
            Section::About
        }
    }
}

fn parse_profile(name: &str) -> ProfileOverride {
    match name.to_lowercase().as_str() {
        "auto" => ProfileOverride::Auto,
        "compact" | "small" => ProfileOverride::Compact,
        "wide" | "full" => ProfileOverride::Wide,
        _ => {
            eprintln!("Unknown profile: {}. Using auto.", name);
            eprintln!("Available: auto, compact, wide");
            ProfileOverride::Auto
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            no_boot,
            section,
            profile,
            time,
            seed,
            no_fetch,
        }) => {
            let config = ShellConfig {
                skip_boot: no_boot,
                start_section: parse_section(&section),
                profile: parse_profile(&profile),
                time_step: time,
                seed,
                offline: no_fetch,
            };
            shell::run(&config)?;
        }
        Some(Commands::Globe {
            profile,
            time,
            seed,
            no_fetch,
        }) => {
            let config = GlobeConfig {
                profile: parse_profile(&profile),
                time_step: time,
                seed,
                offline: no_fetch,
            };
            globe::run(&config)?;
        }
        None => {
            let config = ShellConfig {
                skip_boot: false,
                start_section: Section::About,
                profile: ProfileOverride::Auto,
                time_step: 0.05,
                seed: None,
                offline: false,
            };
            shell::run(&config)?;
        }
    }

    Ok(())
}
