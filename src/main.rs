use anyhow::Result;
use issue_migration::{cli, github_provider::GithubProvider, logging, migration};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::configure_logging()?;

    let settings = cli::run()?;

    migration::run(
        &settings,
        |variable| std::env::var(variable).ok(),
        |token| GithubProvider::configure_provider(token, settings.api_url.clone()),
    )
    .await?;

    Ok(())
}
