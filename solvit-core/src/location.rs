//! Source of the positions an optimisation runs over.
//!
//! The host application owns geocoding and persistence. It exposes the
//! provider's base and the day's job addresses through [`LocationSource`],
//! and [`OptimizeRequest::from_source`](crate::OptimizeRequest::from_source)
//! turns them into a request.

use crate::Position;

/// Supply the provider's start position and the day's job positions.
///
/// # Examples
///
/// ```rust
/// use solvit_core::{LocationSource, OptimizeRequest, Position};
///
/// struct Depot;
///
/// impl LocationSource for Depot {
///     fn start(&self) -> Option<Position> {
///         Some(Position::new(53.48, -2.24, "depot"))
///     }
///
///     fn jobs(&self) -> Vec<Position> {
///         vec![Position::new(53.40, -2.98, "fuse box")]
///     }
/// }
///
/// let request = OptimizeRequest::from_source(&Depot);
/// assert_eq!(request.jobs.len(), 1);
/// ```
pub trait LocationSource {
    /// Current or home position of the provider, if known.
    fn start(&self) -> Option<Position>;

    /// Already geocoded positions of the jobs to visit.
    fn jobs(&self) -> Vec<Position>;
}
