use clap::{Parser, Subcommand};
use packsense_core::{
    CombinedOutcome, CompletionClient, FeedbackCategory, FeedbackSession, ModelId, OutcomeStatus,
    analyze_session, render_report, sample,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packsense")]
#[command(about = "Packaging feedback sentiment analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze feedback files and print the report
    Analyze {
        /// File of consumer reviews
        #[arg(long)]
        reviews: Option<PathBuf>,
        /// File of survey responses
        #[arg(long)]
        surveys: Option<PathBuf>,
        /// File of social media comments
        #[arg(long)]
        social: Option<PathBuf>,
        /// Model identifier (see `packsense models`)
        #[arg(long, default_value = "gpt-4o")]
        model: String,
        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in sample feedback
    Sample,
    /// List selectable model identifiers
    Models,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            reviews,
            surveys,
            social,
            model,
            output,
        }) => {
            let model: ModelId = match model.parse() {
                Ok(model) => model,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            };

            let mut session = FeedbackSession::new();
            if let Some(path) = reviews {
                session.inputs.review = fs::read_to_string(path)?;
            }
            if let Some(path) = surveys {
                session.inputs.survey = fs::read_to_string(path)?;
            }
            if let Some(path) = social {
                session.inputs.social_media = fs::read_to_string(path)?;
            }

            let client = CompletionClient::from_env();
            match analyze_session(&client, &mut session, model).await {
                Ok(run) => {
                    for outcome in &run.categories {
                        match &outcome.status {
                            OutcomeStatus::Analyzed => {
                                eprintln!("Analyzed {}s", outcome.category)
                            }
                            OutcomeStatus::Skipped => {}
                            OutcomeStatus::Failed(e) => {
                                eprintln!("Error analyzing {}s: {}", outcome.category, e)
                            }
                        }
                    }
                    if let CombinedOutcome::Failed(e) = &run.combined {
                        eprintln!("Error generating combined insights: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }

            let report = render_report(&session);
            match output {
                Some(path) => {
                    fs::write(&path, report)?;
                    println!("Wrote report to {}", path.display());
                }
                None => print!("{}", report),
            }
        }
        Some(Commands::Sample) => {
            for (category, block) in [
                (FeedbackCategory::Review, sample::SAMPLE_REVIEWS),
                (FeedbackCategory::Survey, sample::SAMPLE_SURVEYS),
                (FeedbackCategory::SocialMedia, sample::SAMPLE_SOCIAL),
            ] {
                println!("--- {}s ---", category);
                println!("{}\n", block);
            }
        }
        Some(Commands::Models) => {
            for model in ModelId::ALL {
                println!("{}", model);
            }
        }
        None => {
            println!("Use 'packsense --help' for commands");
        }
    }

    Ok(())
}
