use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use curateflow_core::{
    CurateClient, CurateOptions, CurationSession, DepthLevel, GeminiConfig, SUGGESTIONS, VibeType,
    format_playlist_readable,
    types::{DEFAULT_DURATION_MINUTES, validate_duration},
};

/// CLI wrapper for DepthLevel (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliDepth {
    Eli5,
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Academic,
}

impl From<CliDepth> for DepthLevel {
    fn from(cli: CliDepth) -> Self {
        match cli {
            CliDepth::Eli5 => DepthLevel::Eli5,
            CliDepth::Beginner => DepthLevel::Beginner,
            CliDepth::Intermediate => DepthLevel::Intermediate,
            CliDepth::Advanced => DepthLevel::Advanced,
            CliDepth::Academic => DepthLevel::Academic,
        }
    }
}

/// CLI wrapper for VibeType (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliVibe {
    #[default]
    Educational,
    Energetic,
    Relaxing,
    DeepDive,
    Workshop,
}

impl From<CliVibe> for VibeType {
    fn from(cli: CliVibe) -> Self {
        match cli {
            CliVibe::Educational => VibeType::Educational,
            CliVibe::Energetic => VibeType::Energetic,
            CliVibe::Relaxing => VibeType::Relaxing,
            CliVibe::DeepDive => VibeType::DeepDive,
            CliVibe::Workshop => VibeType::Workshop,
        }
    }
}

#[derive(Parser)]
#[command(name = "curateflow")]
#[command(about = "Describe what you want to learn, feel, or experience and get a curated YouTube playlist")]
struct Cli {
    /// What the playlist should be about (e.g. "Learn to bake sourdough from scratch")
    prompt: Option<String>,

    /// Target total watch time in minutes (10-180, step 5)
    #[arg(short, long, default_value_t = DEFAULT_DURATION_MINUTES, value_parser = parse_duration)]
    duration: u32,

    /// Technical depth of the content
    #[arg(long, value_enum, default_value = "beginner")]
    depth: CliDepth,

    /// Tone and pacing of the content
    #[arg(long, value_enum, default_value = "educational")]
    vibe: CliVibe,

    /// Structure the playlist as an ordered course
    #[arg(short, long)]
    course: bool,

    /// Gemini model to use (defaults to CURATEFLOW_MODEL or the built-in model)
    #[arg(short, long)]
    model: Option<String>,

    /// Print the playlist as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn parse_duration(value: &str) -> Result<u32, String> {
    let minutes: u32 = value.parse().map_err(|_| format!("not a number: {value}"))?;
    validate_duration(minutes).map_err(|e| e.to_string())?;
    Ok(minutes)
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

fn print_suggestions() {
    eprintln!("{}", style("Try one of:").dim());
    for suggestion in SUGGESTIONS {
        eprintln!("  {} {}", style("•").cyan(), suggestion);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = CurateOptions::new(cli.duration, cli.depth.into(), cli.vibe.into(), cli.course)?;
    let mut session = CurationSession::new(options);

    let prompt = cli.prompt.unwrap_or_default();
    let Some(ticket) = session.begin(&prompt) else {
        eprintln!(
            "{} Describe your perfect playlist first.",
            style("Error:").red().bold()
        );
        print_suggestions();
        std::process::exit(2);
    };

    let mut config = GeminiConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    // Validate API key early
    if let Err(e) = config.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let client = CurateClient::new(config)?;

    if !cli.json {
        println!(
            "\n{}  {}\n",
            style("curateflow").cyan().bold(),
            style("Playlist Curator").dim()
        );
    }

    let spinner = create_spinner(&format!(
        "Curating {} min of {} / {} with {}...",
        ticket.options.duration_minutes(),
        ticket.options.depth(),
        ticket.options.vibe(),
        client.model()
    ))?;
    let outcome = client
        .generate_curated_playlist(&ticket.prompt, &ticket.options)
        .await;
    session.finish(&ticket, outcome);

    if let Some(message) = session.error() {
        spinner.finish_and_clear();
        eprintln!("{} {}", style("✗").red().bold(), message);
        std::process::exit(1);
    }

    let Some(playlist) = session.playlist() else {
        spinner.finish_and_clear();
        return Ok(());
    };

    if cli.json {
        spinner.finish_and_clear();
        println!("{}", serde_json::to_string_pretty(playlist)?);
        return Ok(());
    }

    spinner.finish_with_message(format!(
        "{} Curated {} videos ({})",
        style("✓").green().bold(),
        playlist.items.len(),
        style(&playlist.total_duration).yellow()
    ));
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_playlist_readable(playlist, ticket.options.is_course_mode());
    println!("{}", readable);

    Ok(())
}
