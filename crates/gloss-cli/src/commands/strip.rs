use anyhow::Context;

use crate::cli::StripArgs;

pub fn handle(args: &StripArgs) -> anyhow::Result<()> {
    let display = args.file.display().to_string();
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {display}"))?;
    let dump = gloss_parser::strip_comments(&source, &display)
        .with_context(|| format!("failed to parse {display}"))?;
    println!("{dump}");
    Ok(())
}
