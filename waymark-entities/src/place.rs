use strum::{EnumIter, EnumString};

use crate::{checkin::AvgRating, geo::MapPoint, id::Id, time::Timestamp};

/// A place within a region that users can check in to.
///
/// `checkin_count` and `avg_rating` are derived from the check-ins of the
/// place; `visit_count` is a best-effort counter; `favorite_count` is owned
/// by the favorites feature and only stored here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id             : Id,
    pub region_id      : Id,
    pub created_by     : Id,
    pub name           : String,
    pub description    : Option<String>,
    pub category       : PlaceCategory,
    pub pos            : MapPoint,
    pub status         : PlaceStatus,
    pub checkin_count  : u64,
    pub favorite_count : u64,
    pub visit_count    : u64,
    pub avg_rating     : Option<AvgRating>,
    pub created_at     : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PlaceCategory {
    Nature,
    Culture,
    Food,
    Lodging,
    Activity,
    Other,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PlaceStatus {
    Draft,
    Published,
    Archived,
}

impl PlaceStatus {
    pub const fn default() -> Self {
        Self::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category() {
        assert_eq!(Ok(PlaceCategory::Food), "food".parse());
        assert_eq!(Ok(PlaceCategory::Lodging), "Lodging".parse());
        assert!("camping".parse::<PlaceCategory>().is_err());
    }

    #[test]
    fn display_status() {
        assert_eq!("published", PlaceStatus::Published.to_string());
    }
}
