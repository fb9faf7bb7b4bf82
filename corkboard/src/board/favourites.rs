//! ListFavourites and ReorderFavourites commands

use super::reorder::{write_reversed_ranks, BoardAxis};
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{Board, BoardId, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// List a user's favourite boards, ordered by `favourite_position`
/// descending. The favourite axis is fully independent of the global
/// board order.
#[derive(Debug, Deserialize)]
pub struct ListFavourites {
    /// The owning user
    pub owner: UserId,
}

impl ListFavourites {
    pub fn new(owner: impl Into<UserId>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListFavourites {
    type Output = Vec<Board>;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Vec<Board>> {
        let mut boards = ctx.favourites_for_user(&self.owner).await?;
        boards.sort_by(|a, b| {
            b.favourite_position
                .cmp(&a.favourite_position)
                .then(a.id.cmp(&b.id))
        });
        Ok(boards)
    }
}

/// Rewrite `favourite_position` for the supplied boards to match their
/// list order - the same reversed dense-rank write as `ReorderBoards`,
/// targeting the favourite axis.
#[derive(Debug, Deserialize)]
pub struct ReorderFavourites {
    /// Desired display order of the favourites view
    pub boards: Vec<BoardId>,
}

impl ReorderFavourites {
    pub fn new(boards: Vec<BoardId>) -> Self {
        Self { boards }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ReorderFavourites {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        write_reversed_ranks(ctx, &self.boards, BoardAxis::Favourite).await
    }
}
