//! ReorderBoards command and the shared reversed-rank write loop

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{dense_ranks, BoardId, RankDirection};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// Which board ordering axis a reconciliation writes to
#[derive(Debug, Clone, Copy)]
pub(crate) enum BoardAxis {
    /// Global board order (`position`)
    Position,
    /// Favourite-subset order (`favourite_position`)
    Favourite,
}

impl BoardAxis {
    fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Favourite => "favourite_position",
        }
    }
}

/// Write reversed dense ranks for `boards` onto one ordering axis.
///
/// `boards` is the desired display order; the list is reversed before
/// indexing so its first element ends up with the highest value, matching
/// the descending read order. One store write per board, sequential, in
/// reversed-list order. The first failure is surfaced with earlier writes
/// already committed - re-issuing the same list is the documented
/// recovery, since the assignment is idempotent.
pub(crate) async fn write_reversed_ranks(
    ctx: &CorkboardContext,
    boards: &[BoardId],
    axis: BoardAxis,
) -> Result<()> {
    for (id, rank) in dense_ranks(boards, RankDirection::Reverse) {
        if let Err(err) = write_rank(ctx, &id, rank, axis).await {
            warn!(
                board = %id,
                axis = axis.name(),
                %err,
                "reorder halted mid-list; earlier writes remain committed"
            );
            return Err(err);
        }
        debug!(board = %id, axis = axis.name(), rank, "wrote board rank");
    }
    Ok(())
}

/// Read one board and write its new rank on `axis`. Either failure
/// belongs to the halting branch of the loop above.
async fn write_rank(
    ctx: &CorkboardContext,
    id: &BoardId,
    rank: i64,
    axis: BoardAxis,
) -> Result<()> {
    let mut board = ctx.read_board(id).await?;
    match axis {
        BoardAxis::Position => board.position = rank,
        BoardAxis::Favourite => board.favourite_position = rank,
    }
    ctx.write_board(&board).await
}

/// Rewrite `position` for the supplied boards to match their list order.
///
/// The list is the full desired ordering as displayed (first element
/// first). Boards not in the list are untouched. No ownership check is
/// performed here - authorization is the routing collaborator's concern.
#[derive(Debug, Deserialize)]
pub struct ReorderBoards {
    /// Desired display order, every board of the view
    pub boards: Vec<BoardId>,
}

impl ReorderBoards {
    pub fn new(boards: Vec<BoardId>) -> Self {
        Self { boards }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ReorderBoards {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        write_reversed_ranks(ctx, &self.boards, BoardAxis::Position).await
    }
}
