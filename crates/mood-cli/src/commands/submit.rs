use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::owner::registered_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let owner = registered_user(ctx.service(), &args.user).await?;
    match ctx.ingestor.submit(&owner, &args.text).await? {
        Some(record) => output(&record, flags.format),
        None => output(&json!({"status": "skipped"}), flags.format),
    }
}
