use tracing::{info, warn};

use crate::{
    cli::Repository,
    errors::{MigrationError, Result},
    model::ProjectBoard,
    provider::Provider,
};

#[derive(Clone, Debug, PartialEq)]
pub struct BoardReport {
    pub board: ProjectBoard,
    pub columns: Vec<String>,
}

/// Picks the board at index 0 of the listing. An empty listing is an error;
/// a listing with more than one board is reported and the first one used.
pub fn select_board(boards: Vec<ProjectBoard>, repository: &Repository) -> Result<ProjectBoard> {
    if boards.len() > 1 {
        warn!(
            repository = %repository,
            count = boards.len(),
            "found more than one project board, using the first one"
        );
    }

    boards
        .into_iter()
        .next()
        .ok_or_else(|| MigrationError::NoProjectBoard {
            repository: repository.to_string(),
        })
}

/// Recreates the source's project board and its columns, in order, in the
/// destination. Cards are not copied.
pub async fn replicate_board<P: Provider>(
    provider: &P,
    source: &Repository,
    destination: &Repository,
) -> Result<BoardReport> {
    let source_board = select_board(provider.list_project_boards(source).await?, source)?;
    let columns: Vec<String> = provider
        .list_project_columns(source_board.id)
        .await?
        .into_iter()
        .map(|column| column.name)
        .collect();

    let board = provider
        .create_project_board(
            destination,
            &source_board.name,
            source_board.body.as_deref().unwrap_or_default(),
        )
        .await?;
    info!(repository = %destination, board = %board.name, id = board.id, "created project board");

    for column in columns.iter() {
        provider.create_project_column(board.id, column).await?;
        info!(board = board.id, column = %column, "created project column");
    }

    Ok(BoardReport { board, columns })
}
