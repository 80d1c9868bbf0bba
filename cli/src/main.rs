use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tagrank_core::TagGenerator;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tagrank")]
#[command(about = "Extract TF-IDF tags from a document", long_about = None)]
struct Args {
    /// IDF index file (one `term,weight` record per line)
    #[arg(long)]
    idf: PathBuf,
    /// Document to tag
    #[arg(long)]
    input: PathBuf,
    /// Maximum number of tags to print
    #[arg(long, default_value_t = 10)]
    max_tags: usize,
    /// Print scored terms as JSON instead of one tag per line
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Drop terms missing from the index instead of scoring them with the
    /// rare-term fallback weight
    #[arg(long, default_value_t = false)]
    skip_unknown: bool,
    /// Corpus size the fallback weight for unknown terms is derived from
    #[arg(long)]
    corpus_size: Option<f64>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut tg = TagGenerator::from_path(&args.idf)
        .with_context(|| format!("failed to load idf index {}", args.idf.display()))?
        .allow_unknown(!args.skip_unknown);
    if let Some(size) = args.corpus_size {
        tg = tg.corpus_size(size);
    }

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read document {}", args.input.display()))?;
    tracing::debug!(chars = text.len(), max_tags = args.max_tags, "tagging document");

    if args.json {
        let mut scored = tg.tfidf(&tagrank_core::normalize::normalize(&text));
        scored.truncate(args.max_tags);
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        for tag in tg.generate_tags(&text, args.max_tags) {
            println!("{tag}");
        }
    }
    Ok(())
}
