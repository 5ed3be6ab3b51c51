//! Great-circle distances between positions.
//!
//! The [`DistanceMetric`] trait abstracts the edge weight used when building a
//! [`DistanceMatrix`](crate::DistanceMatrix). [`Haversine`] is the metric used
//! in production; tests may substitute simpler metrics to make expected
//! routes obvious.

use crate::Position;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two positions.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// Inputs are not validated; out-of-range coordinates flow through the
/// arithmetic unchanged.
///
/// # Examples
/// ```
/// use solvit_core::{Position, haversine_km};
///
/// let a = Position::new(0.0, 0.0, "a");
/// let b = Position::new(0.0, 1.0, "b");
/// let km = haversine_km(&a, &b);
/// assert!((km - 111.195).abs() < 0.001);
/// assert_eq!(haversine_km(&a, &a), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: &Position, to: &Position) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push the term fractionally above one for antipodal points.
    let central_angle = 2.0 * half_chord.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * central_angle
}

/// Edge weight between two positions.
///
/// Implementations must return non-negative, finite values for the inputs
/// they accept; the search relies on non-negative edges for pruning.
pub trait DistanceMetric: Send + Sync {
    /// Distance from `from` to `to`.
    fn distance(&self, from: &Position, to: &Position) -> f64;
}

/// The haversine great-circle metric, in kilometres.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, from: &Position, to: &Position) -> f64 {
        haversine_km(from, to)
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, from: &Position, to: &Position) -> f64 {
        (**self).distance(from, to)
    }
}
