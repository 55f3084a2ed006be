mod args;
mod content;
mod render;

use crate::args::{Args, Section};
use anyhow::Result;
use clap::Parser;
use portfolio_lib::{FeedClient, RepositoryFeed};

const GITHUB_API_URL: &str = "https://api.github.com/";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    args.theme.apply();

    if args.section.includes(Section::Home) {
        render::home();
    }
    if args.section.includes(Section::About) {
        render::about();
    }
    if args.section.includes(Section::Experience) {
        render::experience();
    }
    if args.section.includes(Section::Projects) {
        render::featured_projects(&args.category);

        // A failed fetch degrades this section only; the rest of the
        // portfolio still renders and the exit code stays 0.
        render::feed_placeholder();
        let client = FeedClient::new(GITHUB_API_URL)?;
        let mut feed = RepositoryFeed::new(client, &args.account);
        feed.load().await;
        render::repository_feed(feed.state(), feed.account());
    }
    if args.section.includes(Section::Contact) {
        render::contact();
    }

    Ok(())
}
