use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use campaign_radar::config::{self, Config};
use campaign_radar::language::adapter::RetryPolicy;
use campaign_radar::language::detect::WhatlangDetector;
use campaign_radar::language::traits::{PassthroughTranslator, Translator};
use campaign_radar::output::terminal;
use campaign_radar::pipeline::analyze::Analyzer;
use campaign_radar::pipeline::enrich::Enricher;
use campaign_radar::pipeline::{self, ReportDestination, RunOptions, RunOutcome};
use campaign_radar::reports;
use campaign_radar::scoring::keywords::KeywordLexicon;
use campaign_radar::sentiment::vader::VaderScorer;

/// Campaign Radar: rank scraped posts and authors by campaign suspicion.
///
/// Cleans, translates and sentiment-scores a batch of scraped posts, then
/// ranks them by keyword risk, hostile sentiment, engagement anomalies, and
/// author history.
#[derive(Parser)]
#[command(name = "campaign-radar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze scraped_data_<RUN_ID>.json and write both reports
    Analyze {
        /// Run identifier of the scraped batch
        run_id: String,

        /// Post-level report path (omit both paths to use the reports directory)
        post_report: Option<PathBuf>,

        /// User-level report path
        user_report: Option<PathBuf>,

        /// Number of posts to translate in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Keep the intermediate staging table after the run
        #[arg(long)]
        keep_staging: bool,
    },

    /// Re-run scoring from a staging table without re-translating
    Rescore {
        /// Staging table written by `analyze --keep-staging`
        staging: PathBuf,

        /// Post-level report path
        post_report: PathBuf,

        /// User-level report path
        user_report: PathBuf,
    },

    /// List saved reports in the reports directory
    Reports,

    /// Show a saved report
    Show {
        /// Report id as printed by `reports`
        report_id: String,

        /// Number of posts to display (default: 15)
        #[arg(long, default_value = "15")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campaign_radar=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            run_id,
            post_report,
            user_report,
            concurrency,
            keep_staging,
        } => {
            let config = Config::load()?;
            config.require_translator()?;

            let destination = match (post_report, user_report) {
                (Some(posts), Some(users)) => ReportDestination::Explicit { posts, users },
                (None, None) => ReportDestination::Directory(config.reports_dir.clone()),
                _ => anyhow::bail!(
                    "Give both report paths or neither.\n\
                     Usage: campaign-radar analyze <RUN_ID> [POST_REPORT USER_REPORT]"
                ),
            };

            let options = RunOptions {
                run_id,
                data_dir: config.data_dir.clone(),
                destination,
                keep_staging,
            };

            let translator = create_translator(&config)?;
            let sentiment = VaderScorer::new();
            let enricher = Enricher {
                detector: &WhatlangDetector,
                translator: translator.as_ref(),
                sentiment: &sentiment,
                retry: RetryPolicy::default(),
                concurrency,
            };
            let analyzer = Analyzer::default();

            println!("Analyzing run {}...", options.run_id);

            match pipeline::run(&options, &enricher, &analyzer).await? {
                RunOutcome::EmptyInput => {
                    println!(
                        "{} Input batch is empty. No reports written.",
                        "Warning:".yellow()
                    );
                }
                RunOutcome::Completed(summary) => {
                    println!("\n{}", "Analysis complete.".bold());
                    terminal::display_enrich_stats(summary.reports.posts.len(), &summary.stats);
                    terminal::display_post_ranking(&summary.reports.posts, 10);
                    terminal::display_keyword_breakdown(&summary.reports.posts, &analyzer.lexicon);
                    terminal::display_user_ranking(&summary.reports.users);

                    println!(
                        "\n{}",
                        format!("Post report saved to: {}", summary.post_report_path.display())
                            .bold()
                    );
                    println!(
                        "{}",
                        format!("User report saved to: {}", summary.user_report_path.display())
                            .bold()
                    );
                    if let Some(staging) = summary.staging_path {
                        println!("Staging table kept at: {}", staging.display());
                    }
                }
            }
        }

        Commands::Rescore {
            staging,
            post_report,
            user_report,
        } => {
            let analyzer = Analyzer::default();
            println!("Rescoring {}...", staging.display());

            match pipeline::rescore(&staging, &analyzer, &post_report, &user_report)? {
                Some(reports) => {
                    terminal::display_post_ranking(&reports.posts, 10);
                    terminal::display_keyword_breakdown(&reports.posts, &analyzer.lexicon);
                    terminal::display_user_ranking(&reports.users);
                    println!(
                        "\n{}",
                        format!(
                            "Reports saved to: {} and {}",
                            post_report.display(),
                            user_report.display()
                        )
                        .bold()
                    );
                }
                None => {
                    println!(
                        "{} Staging table is empty. No reports written.",
                        "Warning:".yellow()
                    );
                }
            }
        }

        Commands::Reports => {
            let config = Config::load()?;
            let entries = reports::list_reports(&config.reports_dir)?;
            terminal::display_report_list(&entries);
        }

        Commands::Show { report_id, limit } => {
            let config = Config::load()?;
            let report = reports::load_report(&config.reports_dir, &report_id)?;
            println!("{}", reports::display_name(&report_id).bold());
            terminal::display_post_ranking(&report.posts, limit);
            terminal::display_keyword_breakdown(&report.posts, &KeywordLexicon::default());
            terminal::display_user_ranking(&report.users);
        }
    }

    Ok(())
}

/// Create a translator based on the configured backend.
fn create_translator(config: &Config) -> Result<Box<dyn Translator>> {
    match config.translator_backend {
        config::TranslatorBackend::Google => {
            info!("Using Google Translate");
            let translator = campaign_radar::language::google::GoogleTranslator::new(
                &config.google_translate_url,
            )?;
            Ok(Box::new(translator))
        }
        config::TranslatorBackend::Libre => {
            info!(url = config.libretranslate_url.as_str(), "Using LibreTranslate");
            let translator = campaign_radar::language::libre::LibreTranslator::new(
                &config.libretranslate_url,
                &config.libretranslate_api_key,
            )?;
            Ok(Box::new(translator))
        }
        config::TranslatorBackend::Off => {
            info!("Translation disabled");
            Ok(Box::new(PassthroughTranslator))
        }
    }
}
