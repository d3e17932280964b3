use tracing::info;

use crate::{cli::Repository, errors::Result, model::Label, provider::Provider};

/// Keeps the destination's label names in sync while issues are copied over.
///
/// The cached names are re-fetched after every creation instead of appended
/// to, so whatever name the server stores is what later lookups compare with.
pub struct LabelSynchronizer<'a, P: Provider> {
    provider: &'a P,
    repository: &'a Repository,
    known: Vec<String>,
    created: usize,
}

impl<'a, P: Provider> LabelSynchronizer<'a, P> {
    pub async fn new(provider: &'a P, repository: &'a Repository) -> Result<LabelSynchronizer<'a, P>> {
        let mut synchronizer = Self {
            provider,
            repository,
            known: Vec::new(),
            created: 0,
        };
        synchronizer.refresh().await?;

        Ok(synchronizer)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.known.iter().any(|known| known == name)
    }

    /// Number of labels this synchronizer created.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Creates `label` in the destination unless a label with its name is
    /// already there. Returns whether it was created.
    pub async fn ensure_label(&mut self, label: &Label) -> Result<bool> {
        if self.contains(&label.name) {
            return Ok(false);
        }

        self.provider.create_label(self.repository, label).await?;
        self.created += 1;
        info!(repository = %self.repository, label = %label.name, "created label");

        self.refresh().await?;

        Ok(true)
    }

    async fn refresh(&mut self) -> Result<()> {
        self.known = self
            .provider
            .list_labels(self.repository)
            .await?
            .into_iter()
            .map(|label| label.name)
            .collect();

        Ok(())
    }
}
