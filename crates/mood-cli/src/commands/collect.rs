use mood_config::MoodConfig;
use mood_feed::Collector;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CollectArgs;
use crate::output::output;

pub async fn handle(args: &CollectArgs, config: &MoodConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collector = Collector::from_config(&config.feed)?;

    if args.once {
        let report = collector.run_once().await?;
        return output(&report, flags.format);
    }

    if !flags.quiet {
        eprintln!(
            "collecting r/{} every {}s into {} (Ctrl-C to stop)",
            config.feed.subreddit, config.feed.fetch_interval_secs, config.feed.endpoint
        );
    }
    collector.run(super::shutdown_signal()).await;
    Ok(())
}
