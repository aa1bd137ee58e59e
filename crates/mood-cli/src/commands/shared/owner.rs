use anyhow::bail;
use mood_core::identity::{Owner, Username};
use mood_db::service::MoodService;

use crate::cli::root_commands::OwnerArgs;

/// Resolve `--user NAME` to a registered user.
pub async fn registered_user(service: &MoodService, name: &str) -> anyhow::Result<Owner> {
    let username = Username::parse(name)?;
    match service.find_user(username.as_str()).await? {
        Some(found) => Ok(Owner::from(found)),
        None => bail!("unknown user '{username}'; run 'mood account signup' first"),
    }
}

/// Resolve the `--user` / `--feed` pair.
pub async fn resolve_owner(service: &MoodService, args: &OwnerArgs) -> anyhow::Result<Owner> {
    match (&args.user, args.feed) {
        (_, true) => Ok(Owner::ExternalFeed),
        (Some(name), false) => registered_user(service, name).await,
        (None, false) => bail!("either --user or --feed is required"),
    }
}
