//! Labelled geographic coordinates for providers and jobs.

use geo::Coord;

/// A labelled WGS84 position.
///
/// Positions are plain values: two positions are equal when their
/// coordinates and labels are equal. Coordinates are stored in degrees and
/// are not range-checked.
///
/// # Examples
/// ```
/// use solvit_core::Position;
///
/// let home = Position::new(51.5, -0.12, "home");
///
/// assert_eq!(home.latitude, 51.5);
/// assert_eq!(home.label, "home");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Latitude in degrees, nominally `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, nominally `[-180, 180]`.
    pub longitude: f64,
    /// Human readable name, e.g. the customer's address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
}

impl Position {
    /// Construct a position from degrees and a label.
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            label: label.into(),
        }
    }

    /// Construct a position from a `geo` coordinate.
    ///
    /// `x` is the longitude and `y` the latitude.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use solvit_core::Position;
    ///
    /// let depot = Position::from_coord(Coord { x: -0.12, y: 51.5 }, "depot");
    /// assert_eq!(depot.longitude, -0.12);
    /// ```
    pub fn from_coord(coord: Coord<f64>, label: impl Into<String>) -> Self {
        Self::new(coord.y, coord.x, label)
    }

    /// Return the position as a `geo` coordinate (`x = longitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Whether both positions share exactly the same coordinates.
    ///
    /// Labels are ignored.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "coordinate identity is an exact comparison"
    )]
    pub fn same_location(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl From<&Position> for Coord<f64> {
    fn from(position: &Position) -> Self {
        position.coord()
    }
}
