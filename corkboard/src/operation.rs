//! The `Execute` trait for engine operations.
//!
//! Operations are structs where the fields ARE the parameters - no
//! duplication. Each operation names its typed output; the wire layer
//! (out of scope here) decides how to serialize it.

use async_trait::async_trait;

/// An executable operation against a context of type `C` failing with `E`.
///
/// ```ignore
/// let board = CreateBoard::new(owner).execute(&ctx).await?;
/// ```
#[async_trait]
pub trait Execute<C, E> {
    /// What a successful execution produces
    type Output;

    /// Run the operation against the given context
    async fn execute(&self, ctx: &C) -> Result<Self::Output, E>;
}
