use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use cadence::analysis::{self, explorer, keywords};
use cadence::config::Config;
use cadence::data::{format_label, StyleData};
use cadence::llm::gemini::GeminiPolisher;
use cadence::llm::polish_brief;
use cadence::output::terminal;

/// Cadence: co-occurrence analysis for AI music style prompts.
///
/// Scores how well a style prompt hangs together, maps its stylistic
/// neighborhood, and drafts a creative brief — optionally polished into a
/// finished prompt by Gemini.
#[derive(Parser)]
#[command(name = "cadence", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a full style prompt
    Analyze {
        /// The prompt text to analyze
        prompt: String,

        /// Negative keywords to exclude (comma-separated free text)
        #[arg(long, default_value = "")]
        negative: String,

        /// Emit the full analysis as JSON for external renderers
        #[arg(long)]
        json: bool,
    },

    /// Explore a single style, or fuse two
    Explore {
        /// The primary style
        style: String,

        /// Secondary style to blend with (fusion analysis)
        #[arg(long)]
        fuse: Option<String>,

        /// Negative keywords to steer away from (comma-separated free text)
        #[arg(long, default_value = "")]
        negative: String,

        /// Mandatory creative direction injected into the brief
        #[arg(long)]
        direction: Option<String>,

        /// Send the creative brief to Gemini for a polished prompt
        #[arg(long)]
        polish: bool,

        /// Emit the analysis as JSON for external renderers
        #[arg(long)]
        json: bool,
    },

    /// List the recognized style vocabulary
    Styles,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cadence=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // The dataset is required by every command; a missing or malformed file
    // aborts startup.
    let data = StyleData::load(&config.data_path)?;

    match cli.command {
        Commands::Analyze {
            prompt,
            negative,
            json,
        } => match analysis::analyze_prompt(&prompt, &negative, &data) {
            Ok(result) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    terminal::display_prompt_analysis(&result);
                }
            }
            Err(err) => {
                // No recognized keywords is a request problem, not a crash.
                println!("{}", format!("✗ {err}").red());
            }
        },

        Commands::Explore {
            style,
            fuse,
            negative,
            direction,
            polish,
            json,
        } => {
            let negative_keywords = keywords::extract_keywords(&negative, data.styles())
                .into_iter()
                .collect();
            let result = explorer::analyze_styles(
                &style,
                fuse.as_deref(),
                &negative_keywords,
                direction.as_deref(),
                &data,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_explorer(&result);
            }

            if polish {
                config.require_gemini()?;
                let polisher = GeminiPolisher::new(
                    config.gemini_api_key.clone(),
                    config.gemini_model.clone(),
                );
                println!("  Polishing the brief with {}...", config.gemini_model);
                let polished = polish_brief(&polisher, &result.creative_brief).await;
                terminal::display_polished(&polished);
            }
        }

        Commands::Styles => {
            println!("\n{}", "=== Recognized Styles ===".bold());
            for style in data.styles() {
                println!("  {:<24} {}", style, format_label(style).dimmed());
            }
            println!("\n  {} styles in the vocabulary", data.styles().len());
        }
    }

    Ok(())
}
