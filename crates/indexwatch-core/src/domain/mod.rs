//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`IndexId`] | One of the five watchable NSE indices |
//! | [`IndexStock`] | A constituent row from an index csv |
//! | [`IndexMembers`] | All constituents of one fetched index |
//! | [`SavedStock`] | A watchlist entry with its matched indices |
//! | [`Symbol`] | Validated, uppercase ticker |

mod index;
mod models;
mod symbol;

pub use index::IndexId;
pub use models::{IndexMembers, IndexStock, SavedStock};
pub use symbol::Symbol;
