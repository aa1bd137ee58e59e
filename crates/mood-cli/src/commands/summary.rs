use serde::Serialize;

use mood_core::entities::AggregateSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummaryArgs;
use crate::commands::shared::owner::resolve_owner;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SummaryResponse {
    owner: String,
    #[serde(flatten)]
    counts: AggregateSummary,
    total: u64,
}

pub async fn handle(args: &SummaryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let owner = resolve_owner(ctx.service(), &args.owner).await?;
    let counts = ctx.ingestor.summary(&owner).await?;
    output(
        &SummaryResponse {
            owner: owner.to_string(),
            counts,
            total: counts.total(),
        },
        flags.format,
    )
}
