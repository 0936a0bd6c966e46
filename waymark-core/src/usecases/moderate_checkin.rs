use super::prelude::*;
use crate::usecases::{authorize_min_role, authorize_user_by_id, refresh_place_stats};

/// Statuses a moderator may move a check-in into. Restoring a deleted
/// check-in is not part of the moderation vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationStatus {
    Active,
    Hidden,
    Reported,
    Deleted,
}

impl From<ModerationStatus> for CheckinStatus {
    fn from(from: ModerationStatus) -> Self {
        match from {
            ModerationStatus::Active => Self::Active,
            ModerationStatus::Hidden => Self::Hidden,
            ModerationStatus::Reported => Self::Reported,
            ModerationStatus::Deleted => Self::Deleted,
        }
    }
}

/// Admin-moderated status transition. `Deleted` is terminal: once a
/// check-in has been (soft) deleted no further moderation applies.
pub fn moderate_checkin<D: Db>(
    db: &D,
    actor_id: &Id,
    checkin_id: &Id,
    status: ModerationStatus,
) -> Result<Checkin> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Admin)?;
    let checkin = db
        .get_checkin(checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))?;
    if checkin.status == CheckinStatus::Deleted {
        return Err(if status == ModerationStatus::Deleted {
            Error::CheckinAlreadyDeleted
        } else {
            Error::CheckinDeleted
        });
    }
    let status = CheckinStatus::from(status);
    db.update_checkin_status(checkin_id, status)?;
    // Moving in or out of the active set shifts the average rating,
    // moving to `Deleted` additionally shifts the count.
    refresh_place_stats(db, &checkin.place_id)?;
    db.get_checkin(checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))
}
