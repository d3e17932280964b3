use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use reqwest::Url;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::cli::Repository;
use crate::errors::Result;
use crate::model::{Issue, IssuePage, Label, ProjectBoard, ProjectColumn};
use crate::provider::Provider;

const PER_PAGE: u8 = 100;

/// Classic project boards are served behind this preview media type.
const PROJECTS_PREVIEW: &str = "inertia";

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct IssueParams {
    per_page: u8,
    page: u32,
    sort: &'static str,
    direction: &'static str,
}

pub struct GithubProvider {
    instance: Octocrab,
}

impl GithubProvider {
    pub fn configure_provider(token: String, base_url: Option<Url>) -> Result<Self> {
        let mut octocrab_builder = Octocrab::builder()
            .personal_token(token)
            .add_preview(PROJECTS_PREVIEW);

        if let Some(url) = base_url {
            octocrab_builder = octocrab_builder.base_url(url)?;
        }

        Ok(Self {
            instance: octocrab_builder.build()?,
        })
    }
}

fn repo_route(repository: &Repository, resource: &str) -> String {
    format!(
        "repos/{owner}/{repo}/{resource}",
        owner = repository.owner,
        repo = repository.name,
        resource = resource
    )
}

#[async_trait]
impl Provider for GithubProvider {
    async fn list_labels(&self, repository: &Repository) -> Result<Vec<Label>> {
        let mut page: Page<Label> = self
            .instance
            .get(
                repo_route(repository, "labels"),
                Some(&PageParams {
                    per_page: PER_PAGE,
                    page: 1,
                }),
            )
            .await?;

        let mut labels = std::mem::take(&mut page.items);
        while let Some(mut next_page) = self.instance.get_page::<Label>(&page.next).await? {
            labels.append(&mut next_page.items);
            page = next_page;
        }

        debug!(repository = %repository, count = labels.len(), "listed labels");

        Ok(labels)
    }

    async fn create_label(&self, repository: &Repository, label: &Label) -> Result<()> {
        let _: serde_json::Value = self
            .instance
            .post(repo_route(repository, "labels"), Some(label))
            .await?;

        Ok(())
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<()> {
        let _: serde_json::Value = self
            .instance
            .post(
                repo_route(repository, "issues"),
                Some(&json!({
                    "title": title,
                    "body": body,
                    "labels": labels,
                })),
            )
            .await?;

        Ok(())
    }

    async fn list_issues_page(&self, repository: &Repository, page: u32) -> Result<IssuePage> {
        let result: Page<Issue> = self
            .instance
            .get(
                repo_route(repository, "issues"),
                Some(&IssueParams {
                    per_page: PER_PAGE,
                    page,
                    sort: "created",
                    direction: "asc",
                }),
            )
            .await?;

        Ok(IssuePage {
            next_page: result.next.as_ref().map(|_| page + 1),
            issues: result.items,
        })
    }

    async fn list_project_boards(&self, repository: &Repository) -> Result<Vec<ProjectBoard>> {
        let boards: Vec<ProjectBoard> = self
            .instance
            .get(repo_route(repository, "projects"), None::<&()>)
            .await?;

        Ok(boards)
    }

    async fn create_project_board(
        &self,
        repository: &Repository,
        name: &str,
        body: &str,
    ) -> Result<ProjectBoard> {
        let board: ProjectBoard = self
            .instance
            .post(
                repo_route(repository, "projects"),
                Some(&json!({ "name": name, "body": body })),
            )
            .await?;

        Ok(board)
    }

    async fn list_project_columns(&self, board_id: u64) -> Result<Vec<ProjectColumn>> {
        let columns: Vec<ProjectColumn> = self
            .instance
            .get(
                format!("projects/{board_id}/columns", board_id = board_id),
                None::<&()>,
            )
            .await?;

        Ok(columns)
    }

    async fn create_project_column(&self, board_id: u64, name: &str) -> Result<()> {
        let _: serde_json::Value = self
            .instance
            .post(
                format!("projects/{board_id}/columns", board_id = board_id),
                Some(&json!({ "name": name })),
            )
            .await?;

        Ok(())
    }
}
