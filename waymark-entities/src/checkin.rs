use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use thiserror::Error;

use crate::{geo::MapPoint, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Checkin {
    pub id            : Id,
    pub user_id       : Id,
    pub place_id      : Id,
    pub comment       : Option<String>,
    pub rating        : Option<RatingValue>,
    pub user_location : MapPoint,
    pub is_private    : bool,
    pub status        : CheckinStatus,
    pub created_at    : Timestamp,
    pub updated_at    : Timestamp,
}

pub type CheckinStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum CheckinStatus {
    Deleted  = -1,
    Active   =  0,
    Hidden   =  1,
    Reported =  2,
}

impl CheckinStatus {
    /// Rows in this status still contribute to the place's check-in count.
    pub fn counts(self) -> bool {
        self != Self::Deleted
    }

    pub const fn default() -> Self {
        Self::Active
    }
}

#[derive(Debug, Error)]
#[error("Invalid check-in status primitive: {0}")]
pub struct InvalidCheckinStatusPrimitive(CheckinStatusPrimitive);

impl TryFrom<CheckinStatusPrimitive> for CheckinStatus {
    type Error = InvalidCheckinStatusPrimitive;
    fn try_from(from: CheckinStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidCheckinStatusPrimitive(from))
    }
}

impl From<CheckinStatus> for CheckinStatusPrimitive {
    fn from(from: CheckinStatus) -> Self {
        use num_traits::ToPrimitive as _;
        from.to_i16().expect("check-in status primitive")
    }
}

/// A single rating submitted with a check-in.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Arithmetic mean of the ratings of a place's active check-ins.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRating {
    fn from(from: RatingValue) -> Self {
        f64::from(i8::from(from)).into()
    }
}

/// Accumulates rating values into their mean.
///
/// `build()` yields `None` when nothing has been accumulated, i.e. a
/// place without any rated active check-in has no average rating at all.
#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(i8::from(val));
        self.cnt += 1;
    }

    pub fn build(self) -> Option<AvgRating> {
        if self.cnt > 0 {
            Some(AvgRating::from(self.acc as f64 / self.cnt as f64).clamp())
        } else {
            None
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}
