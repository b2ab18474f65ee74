use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tracing::info;

use lektio_cli::config::{self, LektioConfig};
use lektio_core::models::plan::LessonPlanRequest;
use lektio_export::DocumentStyles;
use lektio_gemini::{GeminiClient, GenerationConfig};

/// Generate a lesson plan for one syllabus unit and save it as a PDF.
#[derive(Debug, Parser)]
#[command(name = "lektio", version, about)]
struct Args {
    /// Syllabus details for one unit. Reads stdin when neither this nor
    /// --file is given.
    syllabus: Option<String>,

    /// Read the syllabus details from a file instead.
    #[arg(long, conflicts_with = "syllabus")]
    file: Option<PathBuf>,

    /// Destination for the PDF artifact.
    #[arg(long, default_value = "lesson_plan.pdf")]
    output: PathBuf,

    /// Model to invoke (defaults to the configured model).
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature override.
    #[arg(long)]
    temperature: Option<f32>,

    /// Nucleus sampling override.
    #[arg(long)]
    top_p: Option<f32>,

    /// Top-k sampling override.
    #[arg(long)]
    top_k: Option<u32>,

    /// Output token budget override.
    #[arg(long)]
    max_output_tokens: Option<u32>,

    /// Treat the input as already-generated lesson plan text and skip the
    /// model call.
    #[arg(long)]
    from_text: bool,

    /// Print the generated plan text to stdout before rendering.
    #[arg(long)]
    print_plan: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let input = read_input(&args)?;

    let text = if args.from_text {
        input
    } else {
        let request = LessonPlanRequest::new(input);
        request.validate()?;

        let config = load_or_default()?;
        let generation = apply_overrides(config.generation.clone(), &args);
        let model = args.model.clone().unwrap_or_else(|| config.model.clone());
        let api_key = config::resolve_api_key(&config)?;

        let client = GeminiClient::new(api_key, model, generation);
        let plan = client.generate_lesson_plan(&request)?;
        if args.print_plan {
            println!("{}", plan.text);
        }
        plan.text
    };

    lektio_export::render_to_file(&text, &DocumentStyles::default(), &args.output)?;
    info!(path = %args.output.display(), "lesson plan ready");
    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(syllabus) = &args.syllabus {
        return Ok(syllabus.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn load_or_default() -> Result<LektioConfig> {
    if config::has_config() {
        config::load_config()
    } else {
        Ok(LektioConfig::default())
    }
}

fn apply_overrides(mut generation: GenerationConfig, args: &Args) -> GenerationConfig {
    if let Some(temperature) = args.temperature {
        generation.temperature = temperature;
    }
    if let Some(top_p) = args.top_p {
        generation.top_p = top_p;
    }
    if let Some(top_k) = args.top_k {
        generation.top_k = top_k;
    }
    if let Some(max_output_tokens) = args.max_output_tokens {
        generation.max_output_tokens = max_output_tokens;
    }
    generation
}
