use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccountCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AccountResponse {
    status: &'static str,
    username: String,
}

pub async fn handle(
    action: &AccountCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match action {
        AccountCommands::Signup(args) => {
            let username = ctx.service().signup(&args.user, &args.password).await?;
            AccountResponse {
                status: "created",
                username: username.to_string(),
            }
        }
        AccountCommands::Login(args) => {
            let username = ctx.service().login(&args.user, &args.password).await?;
            AccountResponse {
                status: "ok",
                username: username.to_string(),
            }
        }
    };
    output(&response, flags.format)
}
