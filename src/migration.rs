use tracing::info;

use crate::{
    board::{replicate_board, BoardReport},
    cli::{load_token, Settings},
    errors::Result,
    issues::replicate_issues,
    labels::LabelSynchronizer,
    provider::Provider,
};

#[derive(Clone, Debug, PartialEq)]
pub struct MigrationReport {
    pub board: Option<BoardReport>,
    pub labels_created: usize,
    pub issues_created: usize,
    pub pull_requests_skipped: usize,
}

/// Loads the token, builds a provider from it with `connect` and runs the
/// migration. Nothing is connected when the token is missing.
pub async fn run<P, L, C>(settings: &Settings, lookup_env: L, connect: C) -> Result<MigrationReport>
where
    P: Provider,
    L: Fn(&str) -> Option<String>,
    C: FnOnce(String) -> Result<P>,
{
    let token = load_token(&settings.token_variable, lookup_env)?;
    let provider = connect(token)?;

    migrate(&provider, settings).await
}

pub async fn migrate<P: Provider>(provider: &P, settings: &Settings) -> Result<MigrationReport> {
    info!(
        source = %settings.source,
        destination = %settings.destination,
        "starting migration"
    );

    let board = if settings.project_board {
        Some(replicate_board(provider, &settings.source, &settings.destination).await?)
    } else {
        None
    };

    let mut labels = LabelSynchronizer::new(provider, &settings.destination).await?;
    let issues = replicate_issues(
        provider,
        &settings.source,
        &settings.destination,
        &mut labels,
    )
    .await?;

    let report = MigrationReport {
        board,
        labels_created: labels.created(),
        issues_created: issues.issues_created,
        pull_requests_skipped: issues.pull_requests_skipped,
    };
    info!(
        labels_created = report.labels_created,
        issues_created = report.issues_created,
        pull_requests_skipped = report.pull_requests_skipped,
        "migration finished"
    );

    Ok(report)
}
