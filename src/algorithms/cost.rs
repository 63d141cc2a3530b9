/// Route cost accumulation

use super::{AlgorithmError, AlgorithmResult};
use crate::storage::GraphStorage;
use crate::types::{Route, Weight};

/// Sum the distances along a route
///
/// Each leg is priced with `edge_weight`, so parallel edges contribute the
/// first one added. A single-city route costs 0.
///
/// # Errors
/// `AlgorithmError::InvalidPath` if two consecutive cities are not adjacent.
/// Routes returned by a search over the same store never trigger this.
pub fn path_cost(storage: &dyn GraphStorage, route: &Route) -> AlgorithmResult<Weight> {
    route
        .legs()
        .enumerate()
        .try_fold(0, |total: Weight, (position, (from, to))| {
            let weight = storage
                .edge_weight(from, to)
                .map_err(|source| AlgorithmError::InvalidPath { position, source })?;
            Ok(total.saturating_add(weight))
        })
}
