use async_trait::async_trait;

use crate::{
    cli::Repository,
    errors::Result,
    model::{IssuePage, Label, ProjectBoard, ProjectColumn},
};

/// Remote operations the migration needs from a repository host.
///
/// Every call is a single attempt: errors are handed back unchanged and never
/// retried.
#[async_trait]
pub trait Provider: Send + Sync {
    /// All labels currently defined in `repository`.
    async fn list_labels(&self, repository: &Repository) -> Result<Vec<Label>>;

    async fn create_label(&self, repository: &Repository, label: &Label) -> Result<()>;

    /// Creates one issue. Every name in `labels` must already exist in
    /// `repository`.
    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<()>;

    /// One page of issues, oldest first. Pages are numbered from 1.
    async fn list_issues_page(&self, repository: &Repository, page: u32) -> Result<IssuePage>;

    async fn list_project_boards(&self, repository: &Repository) -> Result<Vec<ProjectBoard>>;

    async fn create_project_board(
        &self,
        repository: &Repository,
        name: &str,
        body: &str,
    ) -> Result<ProjectBoard>;

    async fn list_project_columns(&self, board_id: u64) -> Result<Vec<ProjectColumn>>;

    async fn create_project_column(&self, board_id: u64, name: &str) -> Result<()>;
}
