use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    cli::Repository,
    errors::Result,
    model::{Issue, IssuePage, Label, ProjectBoard, ProjectColumn},
    provider::Provider,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListLabels(Repository),
    CreateLabel(Repository, Label),
    CreateIssue {
        repository: Repository,
        title: String,
        body: String,
        labels: Vec<String>,
    },
    ListIssuesPage(Repository, u32),
    ListProjectBoards(Repository),
    CreateProjectBoard {
        repository: Repository,
        name: String,
        body: String,
    },
    ListProjectColumns(u64),
    CreateProjectColumn(u64, String),
}

#[derive(Default)]
struct State {
    labels: HashMap<String, Vec<Label>>,
    issue_pages: HashMap<String, Vec<Vec<Issue>>>,
    boards: HashMap<String, Vec<ProjectBoard>>,
    columns: HashMap<u64, Vec<ProjectColumn>>,
    calls: Vec<Call>,
}

/// In-memory repository host that records every call made through it.
///
/// Clones share the same state. Creating a label whose name already exists
/// panics, since the real API rejects it.
#[derive(Clone, Default)]
pub struct RecordingProvider {
    state: Arc<Mutex<State>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(self, repository: &Repository, labels: Vec<Label>) -> Self {
        self.state
            .lock()
            .unwrap()
            .labels
            .insert(repository.to_string(), labels);
        self
    }

    pub fn with_issue_pages(self, repository: &Repository, pages: Vec<Vec<Issue>>) -> Self {
        self.state
            .lock()
            .unwrap()
            .issue_pages
            .insert(repository.to_string(), pages);
        self
    }

    pub fn with_board(self, repository: &Repository, board: ProjectBoard, columns: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.columns.insert(
                board.id,
                columns
                    .iter()
                    .map(|name| ProjectColumn {
                        name: name.to_string(),
                    })
                    .collect(),
            );
            state
                .boards
                .entry(repository.to_string())
                .or_default()
                .push(board);
        }
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn labels(&self, repository: &Repository) -> Vec<Label> {
        self.state
            .lock()
            .unwrap()
            .labels
            .get(&repository.to_string())
            .cloned()
            .unwrap_or_default()
    }

    pub fn boards(&self, repository: &Repository) -> Vec<ProjectBoard> {
        self.state
            .lock()
            .unwrap()
            .boards
            .get(&repository.to_string())
            .cloned()
            .unwrap_or_default()
    }

    pub fn columns(&self, board_id: u64) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .columns
            .get(&board_id)
            .map(|columns| columns.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Issues created through this provider, as `(title, body, labels)`.
    pub fn created_issues(&self) -> Vec<(String, String, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue {
                    title, body, labels, ..
                } => Some((title, body, labels)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl Provider for RecordingProvider {
    async fn list_labels(&self, repository: &Repository) -> Result<Vec<Label>> {
        self.record(Call::ListLabels(repository.clone()));
        Ok(self.labels(repository))
    }

    async fn create_label(&self, repository: &Repository, label: &Label) -> Result<()> {
        self.record(Call::CreateLabel(repository.clone(), label.clone()));

        let mut state = self.state.lock().unwrap();
        let labels = state.labels.entry(repository.to_string()).or_default();
        assert!(
            labels.iter().all(|existing| existing.name != label.name),
            "label {} already exists in {}",
            label.name,
            repository
        );
        labels.push(label.clone());

        Ok(())
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<()> {
        self.record(Call::CreateIssue {
            repository: repository.clone(),
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.to_vec(),
        });
        Ok(())
    }

    async fn list_issues_page(&self, repository: &Repository, page: u32) -> Result<IssuePage> {
        self.record(Call::ListIssuesPage(repository.clone(), page));

        let state = self.state.lock().unwrap();
        let pages = state
            .issue_pages
            .get(&repository.to_string())
            .cloned()
            .unwrap_or_default();
        let index = page.saturating_sub(1) as usize;

        Ok(IssuePage {
            issues: pages.get(index).cloned().unwrap_or_default(),
            next_page: (index + 1 < pages.len()).then(|| page + 1),
        })
    }

    async fn list_project_boards(&self, repository: &Repository) -> Result<Vec<ProjectBoard>> {
        self.record(Call::ListProjectBoards(repository.clone()));
        Ok(self.boards(repository))
    }

    async fn create_project_board(
        &self,
        repository: &Repository,
        name: &str,
        body: &str,
    ) -> Result<ProjectBoard> {
        self.record(Call::CreateProjectBoard {
            repository: repository.clone(),
            name: name.to_string(),
            body: body.to_string(),
        });

        let mut state = self.state.lock().unwrap();
        let id = 1000 + state.columns.len() as u64;
        let board = ProjectBoard {
            id,
            name: name.to_string(),
            body: Some(body.to_string()),
        };
        state.columns.insert(id, Vec::new());
        state
            .boards
            .entry(repository.to_string())
            .or_default()
            .push(board.clone());

        Ok(board)
    }

    async fn list_project_columns(&self, board_id: u64) -> Result<Vec<ProjectColumn>> {
        self.record(Call::ListProjectColumns(board_id));
        Ok(self
            .state
            .lock()
            .unwrap()
            .columns
            .get(&board_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_project_column(&self, board_id: u64, name: &str) -> Result<()> {
        self.record(Call::CreateProjectColumn(board_id, name.to_string()));
        self.state
            .lock()
            .unwrap()
            .columns
            .entry(board_id)
            .or_default()
            .push(ProjectColumn {
                name: name.to_string(),
            });
        Ok(())
    }
}
