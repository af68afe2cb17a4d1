//! CLI pour l'analyse du contenu GC

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{analyze, composition};
use gcscan_core::{InputFormat, LoadOptions, ValidationMode, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};

#[derive(Parser)]
#[command(name = "gcscan")]
#[command(about = "Contenu GC par fenêtres et composition nucléotidique", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calcule le GC par fenêtres et le résumé de composition
    Analyze {
        /// Fichier de séquence (texte brut ou FASTA)
        #[arg(short, long)]
        input: PathBuf,

        /// Taille de fenêtre (bp)
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = parse_window_size)]
        window_size: usize,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        input_opts: InputOptions,
    },

    /// Affiche uniquement la composition de la séquence entière
    Composition {
        /// Fichier de séquence (texte brut ou FASTA)
        #[arg(short, long)]
        input: PathBuf,

        /// Sortie JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input_opts: InputOptions,
    },
}

/// Politique de lecture du fichier
#[derive(clap::Args, Clone, Copy)]
pub struct InputOptions {
    /// Rejeter tout caractère hors A, T, G, C
    #[arg(long)]
    strict: bool,

    /// Lire le fichier comme FASTA (en-têtes '>' ignorés)
    #[arg(long)]
    fasta: bool,

    /// Retirer les '\r' des fins de ligne CRLF (comptés dans la longueur sinon)
    #[arg(long)]
    strip_cr: bool,
}

impl InputOptions {
    pub fn validation(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        }
    }

    pub fn format(&self) -> InputFormat {
        if self.fasta {
            InputFormat::Fasta
        } else {
            InputFormat::Raw
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            validation: self.validation(),
            format: self.format(),
            strip_carriage_returns: self.strip_cr,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
    Html,
    Svg,
}

fn parse_window_size(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' n'est pas un entier positif", s))?;
    if value < MIN_WINDOW_SIZE {
        return Err(format!("la taille de fenêtre doit être >= {}", MIN_WINDOW_SIZE));
    }
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gcscan_core::init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            window_size,
            format,
            output,
            input_opts,
        } => {
            analyze::run(input, window_size, format, output, input_opts)?;
        }
        Commands::Composition {
            input,
            json,
            input_opts,
        } => {
            composition::run(input, json, input_opts)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}
