use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::owner::resolve_owner;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let owner = resolve_owner(ctx.service(), &args.owner).await?;
    let limit = effective_limit(flags.limit, ctx.config.general.history_limit);
    let records = ctx.ingestor.history(&owner, limit).await?;
    output(&records, flags.format)
}
