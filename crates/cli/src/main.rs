mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::PipelineConfig;
use crawl::CrawlClient;
use extract::{ExtractionClient, ExtractionParams};
use graph::CypherGenerator;

#[derive(Parser)]
#[command(
    name = "newsgraph",
    about = "Rank feed articles by relevance, extract structured data, compile Cypher"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover, rank, and extract pages from an article feed
    Run {
        /// Article feed URL (XML item/link listing)
        #[arg(long)]
        feed: String,
        /// Relevance query the pages are ranked against
        #[arg(short, long)]
        query: Option<String>,
        /// Number of top-scoring pages to extract
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// Minimum page score to keep
        #[arg(long)]
        min_score: Option<f64>,
        /// Words per chunk window
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Window stride in words
        #[arg(long)]
        step: Option<usize>,
        /// Crawl service base URL
        #[arg(long, default_value = "http://localhost:11235")]
        crawler: String,
        /// Extraction service base URL
        #[arg(long, default_value = "http://localhost:11235")]
        llm: String,
        /// Extraction results file
        #[arg(short, long, default_value = "extraction_results.json")]
        output: PathBuf,
    },
    /// Extract a knowledge graph from a single page
    Harvest {
        /// Page URL to extract from
        #[arg(long)]
        url: String,
        /// Extraction service base URL
        #[arg(long, default_value = "http://localhost:11235")]
        llm: String,
        /// Output file for the extracted document
        #[arg(short, long, default_value = "kb_result.json")]
        output: PathBuf,
    },
    /// Compile an entities/relationships JSON file into a Cypher script
    Compile {
        /// Input JSON file
        input: PathBuf,
        /// Directory the script is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            feed,
            query,
            top_k,
            min_score,
            chunk_size,
            step,
            crawler,
            llm,
            output,
        } => {
            let defaults = PipelineConfig::default();
            let config = PipelineConfig {
                source_feed_url: feed,
                query: query.unwrap_or(defaults.query),
                top_k: top_k.unwrap_or(defaults.top_k),
                min_score: min_score.unwrap_or(defaults.min_score),
                chunk_size: chunk_size.unwrap_or(defaults.chunk_size),
                step: step.unwrap_or(defaults.step),
            };

            let crawler = CrawlClient::new(crawler);
            let llm = ExtractionClient::new(
                llm,
                extract::schema::INSIGHTS_INSTRUCTION.to_string(),
                None,
                ExtractionParams::default(),
            );

            let summary = pipeline::run(&config, &crawler, &llm, &output).await?;

            println!(
                "Fetched {} of {} discovered pages.",
                summary.pages_fetched, summary.links_found
            );
            println!("Top {} relevant pages:", config.top_k);
            for (i, page) in summary.ranked.iter().enumerate() {
                println!("{}. {} (score: {:.4})", i + 1, page.url, page.score);
            }
            let failures = summary.results.iter().filter(|r| r.error.is_some()).count();
            println!(
                "Extraction results ({} ok, {} failed) saved to {}",
                summary.results.len() - failures,
                failures,
                output.display()
            );
            Ok(())
        }
        Commands::Harvest { url, llm, output } => {
            let llm = ExtractionClient::new(
                llm,
                extract::schema::KNOWLEDGE_GRAPH_INSTRUCTION.to_string(),
                Some(extract::schema::knowledge_graph_schema()),
                ExtractionParams::default(),
            );
            pipeline::harvest(&llm, url, &output).await?;
            println!("Extraction complete. Output saved to {}", output.display());
            Ok(())
        }
        Commands::Compile { input, out_dir } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let script = CypherGenerator::new().compile_str(&json)?;
            let path = graph::save_script(&script, &out_dir)?;
            println!("Cypher query saved to: {}", path.display());
            Ok(())
        }
    }
}
