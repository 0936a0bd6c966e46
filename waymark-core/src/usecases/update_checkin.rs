use super::prelude::*;
use crate::{
    usecases::{authorize_user_by_id, refresh_place_stats},
    util::validate,
};

#[derive(Debug, Default, Clone)]
pub struct CheckinUpdate {
    pub comment: Option<String>,
    pub rating: Option<RatingValue>,
    pub is_private: Option<bool>,
}

impl CheckinUpdate {
    pub fn is_empty(&self) -> bool {
        let Self {
            comment,
            rating,
            is_private,
        } = self;
        comment.is_none() && rating.is_none() && is_private.is_none()
    }
}

/// Only the owner may update a check-in; admins are deliberately not
/// allowed on this path.
pub fn update_checkin<D: Db>(
    db: &D,
    actor_id: &Id,
    checkin_id: &Id,
    update: CheckinUpdate,
) -> Result<Checkin> {
    if update.is_empty() {
        return Err(Error::EmptyUpdate);
    }
    let actor = authorize_user_by_id(db, actor_id)?;
    let mut checkin = db
        .get_checkin(checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))?;
    if checkin.status == CheckinStatus::Deleted {
        return Err(Error::CheckinDeleted);
    }
    if checkin.user_id != actor.id {
        return Err(Error::InsufficientPermissions);
    }

    let CheckinUpdate {
        comment,
        rating,
        is_private,
    } = update;
    if let Some(comment) = comment {
        if !validate::is_valid_comment(&comment) {
            return Err(Error::CommentLength);
        }
        // An empty comment clears the field.
        checkin.comment = if comment.is_empty() {
            None
        } else {
            Some(comment)
        };
    }
    let rating_changed = rating.is_some() && rating != checkin.rating;
    if let Some(rating) = rating {
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
        checkin.rating = Some(rating);
    }
    if let Some(is_private) = is_private {
        checkin.is_private = is_private;
    }
    checkin.updated_at = Timestamp::now();
    db.update_checkin(&checkin)?;
    if rating_changed {
        refresh_place_stats(db, &checkin.place_id)?;
    }
    Ok(checkin)
}

/// Caption edits are owned by the check-in's creator.
pub fn update_photo_caption<D: Db>(
    db: &D,
    actor_id: &Id,
    photo_id: &Id,
    caption: Option<&str>,
) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let photo = db
        .get_photo(photo_id)
        .map_err(|err| super::map_not_found(err, Error::PhotoNotFound))?;
    let checkin = db
        .get_checkin(&photo.checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))?;
    if checkin.user_id != actor.id {
        return Err(Error::InsufficientPermissions);
    }
    if let Some(caption) = caption {
        if !validate::is_valid_caption(caption) {
            return Err(Error::CaptionLength);
        }
    }
    Ok(db.update_photo_caption(photo_id, caption)?)
}
