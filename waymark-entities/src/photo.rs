use url::Url;

use crate::id::Id;

/// A photo attached to a check-in.
///
/// The number of photos per check-in is bounded by a configured ceiling
/// that is enforced when the check-in is created.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinPhoto {
    pub id         : Id,
    pub checkin_id : Id,
    pub url        : Url,
    pub caption    : Option<String>,
}
