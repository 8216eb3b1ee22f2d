use crate::{IndexId, IndexMembers, SavedStock, Symbol};

/// Indices, in fetch order, whose constituents include `symbol`.
pub fn memberships(symbol: &Symbol, members: &[IndexMembers]) -> Vec<IndexId> {
    members
        .iter()
        .filter(|index| index.contains(symbol))
        .map(|index| index.index)
        .collect()
}

/// Rebuilds every entry's `indices` against freshly fetched members.
pub fn recompute(saved: &[SavedStock], members: &[IndexMembers]) -> Vec<SavedStock> {
    saved
        .iter()
        .map(|stock| SavedStock::new(stock.symbol.clone(), memberships(&stock.symbol, members)))
        .collect()
}
