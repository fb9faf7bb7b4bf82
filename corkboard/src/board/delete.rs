//! DeleteBoard command

use crate::cascade;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{dense_ranks, BoardId, RankDirection};
use async_trait::async_trait;
use serde::Deserialize;

/// Delete a board, its sections, and their tasks, then close the holes
/// the deletion leaves in both ordering axes.
///
/// After the cascade, every surviving board is renumbered 0..n-1 in
/// ascending-position order (the whole store - `position` is a global
/// axis), and, if the deleted board was a favourite, the owner's
/// remaining favourites are renumbered the same way on their axis.
#[derive(Debug, Deserialize)]
pub struct DeleteBoard {
    /// The board to delete
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteBoard {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        let board = ctx.read_board(&self.id).await?;

        cascade::delete_board_tree(ctx, &board).await?;

        // Renumber the global axis over every surviving board.
        let mut survivors = ctx.read_all_boards().await?;
        survivors.sort_by(|a, b| a.position.cmp(&b.position).then(a.id.cmp(&b.id)));
        for (mut survivor, rank) in dense_ranks(&survivors, RankDirection::Forward) {
            survivor.position = rank;
            ctx.write_board(&survivor).await?;
        }

        // And the favourite axis, if the deleted board occupied a slot.
        if board.favourite {
            let mut favourites = ctx.favourites_for_user(&board.user).await?;
            favourites.sort_by(|a, b| {
                a.favourite_position
                    .cmp(&b.favourite_position)
                    .then(a.id.cmp(&b.id))
            });
            for (mut favourite, rank) in dense_ranks(&favourites, RankDirection::Forward) {
                favourite.favourite_position = rank;
                ctx.write_board(&favourite).await?;
            }
        }

        Ok(())
    }
}
