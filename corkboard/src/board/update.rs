//! UpdateBoard command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{
    dense_ranks, Board, BoardId, RankDirection, DEFAULT_DESCRIPTION, DEFAULT_TITLE,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Update a board's display fields and/or favourite flag.
///
/// Empty `title`/`description` strings are coerced to the documented
/// defaults before writing. Toggling `favourite` maintains the favourite
/// ordering axis without ever touching `position`:
///
/// - turning ON appends the board to the end of the owner's favourite
///   ordering (`favourite_position` = count of the other favourites);
/// - turning OFF renumbers the remaining favourites 0..n-1 to close the
///   gap. The board's own stale `favourite_position` is left in place -
///   it is ignored while `favourite` is false.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBoard {
    /// The board to update
    pub id: BoardId,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favourite: Option<bool>,
}

impl UpdateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the title (empty coerces to the default)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description (empty coerces to the default)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the favourite flag
    pub fn with_favourite(mut self, favourite: bool) -> Self {
        self.favourite = Some(favourite);
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for UpdateBoard {
    type Output = Board;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Board> {
        let mut board = ctx.read_board(&self.id).await?;

        if let Some(icon) = &self.icon {
            board.icon = icon.clone();
        }
        if let Some(title) = &self.title {
            board.title = if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.clone()
            };
        }
        if let Some(description) = &self.description {
            board.description = if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description.clone()
            };
        }

        if let Some(favourite) = self.favourite {
            if favourite != board.favourite {
                self.toggle_favourite(ctx, &mut board, favourite).await?;
            }
        }

        ctx.write_board(&board).await?;
        Ok(board)
    }
}

impl UpdateBoard {
    /// Maintain the favourite axis across a flag flip.
    async fn toggle_favourite(
        &self,
        ctx: &CorkboardContext,
        board: &mut Board,
        favourite: bool,
    ) -> Result<()> {
        let mut others = ctx.favourites_for_user(&board.user).await?;
        others.retain(|other| other.id != board.id);
        others.sort_by(|a, b| {
            a.favourite_position
                .cmp(&b.favourite_position)
                .then(a.id.cmp(&b.id))
        });

        board.favourite = favourite;
        if favourite {
            // Append to the end of the favourite ordering.
            board.favourite_position = others.len() as i64;
            debug!(board = %board.id, rank = board.favourite_position, "favourited");
        } else {
            // Close the gap the removal leaves; this board's own stale
            // favourite_position stays as-is.
            for (mut other, rank) in dense_ranks(&others, RankDirection::Forward) {
                other.favourite_position = rank;
                ctx.write_board(&other).await?;
            }
            debug!(board = %board.id, survivors = others.len(), "unfavourited");
        }
        Ok(())
    }
}
