use crate::{id::Id, time::Timestamp};

/// A delegated editing capability on a place.
///
/// Grants specific rights to a non-owner user without transferring
/// ownership. One row per (user, place) pair; `accepted_at` is unset
/// while the invitation has not been accepted yet. Removal deletes
/// the row.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacePermission {
    pub id          : Id,
    pub place_id    : Id,
    pub user_id     : Id,
    pub can_edit    : bool,
    pub can_delete  : bool,
    pub invited_by  : Id,
    pub invited_at  : Timestamp,
    pub accepted_at : Option<Timestamp>,
}

impl PlacePermission {
    pub fn is_accepted(&self) -> bool {
        self.accepted_at.is_some()
    }
}
