use anyhow::Context;

use crate::cli::ExtractArgs;

pub fn handle(args: &ExtractArgs) -> anyhow::Result<()> {
    let doc = gloss_parser::extract_declarations(&args.file)
        .with_context(|| format!("failed to extract {}", args.file.display()))?;
    let json = serde_json::to_string_pretty(&doc).context("failed to serialize document")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "declaration document written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
