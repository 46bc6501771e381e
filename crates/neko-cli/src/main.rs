//! Neko CLI - exercise the cat detector and translator from the terminal.
//!
//! Talks to the same Vision and DeepL endpoints the bot uses, so a local
//! image can be classified without going through LINE at all.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;

use neko::services::{CatDetector, Translator};
use neko::CatVerdict;

#[derive(Parser)]
#[command(name = "neko")]
#[command(about = "Neko CLI - Cat detection and translation tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a local image file as cat or not cat
    Classify {
        /// Path to the image file
        file: String,

        /// Print the raw labels behind the verdict
        #[arg(short, long)]
        labels: bool,
    },

    /// Translate English text to Japanese
    Translate {
        /// Text to translate
        text: String,
    },

    /// Show which environment variables are configured
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { file, labels } => cmd_classify(&file, labels).await,
        Commands::Translate { text } => cmd_translate(&text).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_classify(file: &str, show_labels: bool) -> Result<()> {
    let vision_api_url =
        std::env::var("VISION_API_URL").context("VISION_API_URL must be set")?;

    let image = fs::read(file).with_context(|| format!("Failed to read file: {}", file))?;
    if image.is_empty() {
        bail!("File is empty: {}", file);
    }

    println!("{} {}", "Classifying:".bold(), file.cyan());

    let detector = CatDetector::new(vision_api_url);
    let annotations = detector
        .annotate(&image)
        .await
        .context("Label detection failed")?;

    let verdict = CatVerdict::from_labels(&annotations);
    match &verdict {
        CatVerdict::Cat { score } => {
            println!("{} Cat detected (score {:.2})", "✓".green(), score);
        }
        CatVerdict::NotCat { .. } => {
            println!("{} Not a cat", "✗".red());
        }
        CatVerdict::Unavailable => {
            println!("{} No labels returned for this image", "⚠".yellow());
        }
    }
    if let Some(text) = verdict.reply_text() {
        println!("  {}", text.cyan());
    }

    if show_labels {
        println!();
        println!("{}", "Labels:".bold());
        for label in &annotations {
            println!("  {:.3}  {}", label.score, label.description.dimmed());
        }
    }

    Ok(())
}

async fn cmd_translate(text: &str) -> Result<()> {
    let auth_key = std::env::var("DEEPL_AUTH_KEY").context("DEEPL_AUTH_KEY must be set")?;

    let mut translator = Translator::new(auth_key);
    if let Ok(endpoint) = std::env::var("DEEPL_API_URL") {
        translator = translator.with_endpoint(endpoint);
    }

    let translated = translator
        .translate(text)
        .await
        .context("Translation failed")?;

    // Bare output so the result can be piped.
    println!("{}", translated);

    Ok(())
}

fn cmd_config() -> Result<()> {
    println!("{}", "Configuration:".bold());
    print_var("LINE_CHANNEL_ACCESS_TOKEN", true);
    print_var("VISION_API_URL", true);
    print_var("DEEPL_AUTH_KEY", false);
    print_var("DEEPL_API_URL", false);
    print_var("LINE_API_URL", false);
    print_var("LINE_DATA_API_URL", false);
    print_var("NEKO_BIND_ADDR", false);
    Ok(())
}

fn print_var(name: &str, required: bool) {
    let status = match (std::env::var(name).is_ok(), required) {
        (true, _) => "Set".green(),
        (false, true) => "Not set".red(),
        (false, false) => "Not set".dimmed(),
    };
    println!("  {}: {}", name, status);
}
