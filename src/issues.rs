use tracing::{debug, info};

use crate::{
    cli::Repository, errors::Result, labels::LabelSynchronizer, model::Issue, provider::Provider,
};

/// Walks the issue listing of one repository page by page, starting from
/// page 1. A new `IssuePages` starts over; an exhausted one stays exhausted.
pub struct IssuePages<'a, P: Provider> {
    provider: &'a P,
    repository: &'a Repository,
    next: Option<u32>,
}

impl<'a, P: Provider> IssuePages<'a, P> {
    pub fn new(provider: &'a P, repository: &'a Repository) -> Self {
        Self {
            provider,
            repository,
            next: Some(1),
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<Issue>>> {
        let page = match self.next {
            Some(page) => page,
            None => return Ok(None),
        };

        let result = self.provider.list_issues_page(self.repository, page).await?;
        debug!(repository = %self.repository, page, count = result.issues.len(), "fetched issue page");
        self.next = result.next_page;

        Ok(Some(result.issues))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueReport {
    pub issues_created: usize,
    pub pull_requests_skipped: usize,
}

/// Copies every issue of `source` into the synchronizer's repository, creating
/// the labels each one carries before the issue itself.
pub async fn replicate_issues<P: Provider>(
    provider: &P,
    source: &Repository,
    destination: &Repository,
    labels: &mut LabelSynchronizer<'_, P>,
) -> Result<IssueReport> {
    let mut report = IssueReport::default();
    let mut pages = IssuePages::new(provider, source);

    while let Some(issues) = pages.next_page().await? {
        for issue in issues.iter() {
            if issue.is_pull_request() {
                debug!(title = %issue.title, "skipping pull request");
                report.pull_requests_skipped += 1;
                continue;
            }

            for label in issue.labels.iter() {
                labels.ensure_label(label).await?;
            }

            provider
                .create_issue(
                    destination,
                    &issue.title,
                    issue.body.as_deref().unwrap_or_default(),
                    &issue.label_names(),
                )
                .await?;
            report.issues_created += 1;
            info!(repository = %destination, title = %issue.title, "created issue");
        }
    }

    Ok(report)
}
