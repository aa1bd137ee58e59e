use std::io::Read;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IngestArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &IngestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = read_input(args.file.as_deref())?;
    let report = ctx.ingestor.ingest_json(&body).await?;
    output(&report, flags.format)
}

fn read_input(file: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match file {
        None | Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read batch from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read(path).with_context(|| format!("failed to read {path}")),
    }
}
