pub mod fill;
pub mod list;
pub mod list_tags;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Logs Mon-Fri work hours to Clockify, tagging Argentina public holidays.", long_about = None)]
#[command(group(ArgGroup::new("listing").args(["list", "list_tags"])))]
pub struct Cli {
    #[arg(long, help = "List workspaces, projects and tags with their IDs", conflicts_with_all = ["from", "to", "desc", "dry_run", "include_weekends"])]
    list: bool,

    #[arg(long, help = "List tags and check that the holiday tag exists", conflicts_with_all = ["from", "to", "desc", "dry_run", "include_weekends"])]
    list_tags: bool,

    #[arg(long, value_name = "YYYY-MM-DD", help = "First day to log")]
    from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day to log (inclusive)")]
    to: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Description for work entries")]
    desc: Option<String>,

    #[arg(long, help = "Show what would be created without creating anything")]
    dry_run: bool,

    #[arg(long, help = "Also log Saturdays and Sundays")]
    include_weekends: bool,

    #[arg(long, value_name = "PATH", help = "Read settings from this file instead of ./.env")]
    env_file: Option<PathBuf>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = match cli.env_file.as_deref() {
            Some(path) => Config::from_env_file(path)?,
            None => Config::from_env()?,
        };

        if cli.list {
            return list::cmd(&config).await;
        }
        if cli.list_tags {
            return list_tags::cmd(&config).await;
        }

        fill::cmd(
            &config,
            fill::FillArgs {
                from: cli.from,
                to: cli.to,
                desc: cli.desc,
                dry_run: cli.dry_run,
                include_weekends: cli.include_weekends,
            },
        )
        .await
    }
}
