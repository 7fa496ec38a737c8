//! The annotation pipeline: load and parse, optionally strip previous
//! annotations, annotate, regenerate, save to a timestamped sibling.

use anyhow::Context;
use tracing::{debug, info};

use gloss_annotate::{annotate, regenerate, remove_existing_annotations};
use gloss_config::GlossConfig;
use gloss_llm::GenerationClient;

use crate::cli::AnnotateArgs;
use crate::output;

pub async fn handle(args: &AnnotateArgs, config: &GlossConfig) -> anyhow::Result<()> {
    let path_display = args.file.display().to_string();
    debug!(path = %path_display, "loading and parsing script");

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {path_display}"))?;
    let mut module = gloss_parser::parse_module(&source, &path_display)?;

    if args.strip_existing {
        remove_existing_annotations(&mut module);
    }

    let client = GenerationClient::new(&config.llm).context("failed to build generation client")?;
    annotate(&mut module, &source, &client).await;

    let updated = regenerate(&module);
    let out_path = output::timestamped_path(&args.file);
    std::fs::write(&out_path, updated)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(path = %out_path.display(), "annotated script saved");
    println!("{}", out_path.display());
    Ok(())
}
