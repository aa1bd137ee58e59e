//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use mood_config::{MAX_FETCH_LIMIT, MoodConfig};

#[test]
fn loads_feed_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[feed]
subreddit = "programming"
fetch_limit = 250
fetch_interval_secs = 300
save_local = false
backup_path = "backups/posts.jsonl"
endpoint = "http://10.0.0.5:8081/ingest"
user_agent = "test-agent/1.0"
request_timeout_secs = 3
"#,
        )?;

        let config: MoodConfig = Figment::from(Serialized::defaults(MoodConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.feed.subreddit, "programming");
        assert_eq!(config.feed.effective_fetch_limit(), MAX_FETCH_LIMIT);
        assert_eq!(config.feed.fetch_interval_secs, 300);
        assert!(!config.feed.save_local);
        assert_eq!(config.feed.backup_path, "backups/posts.jsonl");
        assert_eq!(config.feed.endpoint, "http://10.0.0.5:8081/ingest");
        assert_eq!(config.feed.user_agent, "test-agent/1.0");
        assert_eq!(config.feed.request_timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn project_toml_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mood")?;
        jail.create_file(
            ".mood/config.toml",
            r#"
[db]
path = ":memory:"

[server]
max_body_bytes = 2048
"#,
        )?;

        let config = MoodConfig::load().expect("config loads");
        assert!(config.db.is_ephemeral());
        assert_eq!(config.server.max_body_bytes, 2048);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_sections_fill_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[feed]\nsubreddit = \"rust\"\n")?;

        let config: MoodConfig = Figment::from(Serialized::defaults(MoodConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.feed.subreddit, "rust");
        assert_eq!(config.feed.fetch_limit, 20);
        assert_eq!(config.feed.fetch_interval_secs, 60);
        Ok(())
    });
}
