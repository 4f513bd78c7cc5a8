//! Single-step draws for 1D and 2D lattice walks.

use std::ops::Add;

use crate::rng::RandomSource;

/// Default probability of a `+1` step.
pub const DEFAULT_BIAS: f64 = 0.5;

/// Draws a single 1D step: `+1` with probability `p`, otherwise `-1`.
///
/// One uniform is consumed per call. `p` is not range checked: `p <= 0`
/// always steps down and `p > 1` always steps up.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::ReplaySource;
/// use walk_core::walk::step_1d;
///
/// let mut source = ReplaySource::uniforms(vec![0.2, 0.8]);
/// assert_eq!(step_1d(&mut source, 0.5), 1);
/// assert_eq!(step_1d(&mut source, 0.5), -1);
/// ```
#[inline]
pub fn step_1d<R: RandomSource + ?Sized>(rng: &mut R, p: f64) -> i64 {
    if rng.gen_uniform() < p {
        1
    } else {
        -1
    }
}

/// Draws a single 2D lattice direction uniformly among the four moves.
#[inline]
pub fn step_2d<R: RandomSource + ?Sized>(rng: &mut R) -> LatticeDirection {
    LatticeDirection::from_index(rng.gen_index(LatticeDirection::ALL.len()))
}

/// One of the four unit moves on the square lattice.
///
/// The declaration order `[PosX, NegX, PosY, NegY]` is the mapping used for
/// uniform index draws and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeDirection {
    /// `(1, 0)`
    PosX,
    /// `(-1, 0)`
    NegX,
    /// `(0, 1)`
    PosY,
    /// `(0, -1)`
    NegY,
}

impl LatticeDirection {
    /// All directions in draw order.
    pub const ALL: [LatticeDirection; 4] = [Self::PosX, Self::NegX, Self::PosY, Self::NegY];

    /// Maps a draw index to a direction; indices wrap modulo 4.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the unit displacement for this direction.
    #[inline]
    pub fn offset(self) -> LatticePoint {
        match self {
            Self::PosX => LatticePoint::new(1, 0),
            Self::NegX => LatticePoint::new(-1, 0),
            Self::PosY => LatticePoint::new(0, 1),
            Self::NegY => LatticePoint::new(0, -1),
        }
    }
}

/// A point (or displacement) on the integer square lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticePoint {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl LatticePoint {
    /// The origin `(0, 0)`.
    pub const ORIGIN: LatticePoint = LatticePoint { x: 0, y: 0 };

    /// Creates a new lattice point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance from the origin.
    #[inline]
    pub fn norm_squared(self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for LatticePoint {
    type Output = LatticePoint;

    #[inline]
    fn add(self, rhs: LatticePoint) -> LatticePoint {
        LatticePoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i64, i64)> for LatticePoint {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<LatticePoint> for (i64, i64) {
    #[inline]
    fn from(point: LatticePoint) -> Self {
        (point.x, point.y)
    }
}
