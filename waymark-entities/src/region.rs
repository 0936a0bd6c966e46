use strum::EnumString;

use crate::{id::Id, time::Timestamp};

/// A geographical region grouping places.
///
/// `place_count` is derived from the places referencing this region and
/// recomputed after every place mutation. `favorite_count` is owned by
/// the favorites feature and only stored here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id             : Id,
    pub name           : String,
    pub description    : Option<String>,
    pub created_by     : Id,
    pub status         : RegionStatus,
    pub place_count    : u64,
    pub favorite_count : u64,
    pub created_at     : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RegionStatus {
    Draft,
    Published,
    Archived,
}

impl RegionStatus {
    pub const fn default() -> Self {
        Self::Draft
    }
}
