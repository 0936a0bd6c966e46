use log::warn;

use super::prelude::*;
use crate::{
    gateways::geo::GeoValidationGateway,
    usecases::{authorize_user_by_id, refresh_place_stats},
    util::validate,
};

/// Limits applied when a check-in is created, taken from the
/// application configuration.
#[derive(Debug, Clone)]
pub struct CheckinPolicy {
    pub max_distance: Distance,
    pub max_photos: usize,
}

impl Default for CheckinPolicy {
    fn default() -> Self {
        Self {
            max_distance: Distance::from_meters(500.0),
            max_photos: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCheckinPhoto {
    pub url: Url,
    pub caption: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCheckin {
    pub place_id: Id,
    pub comment: Option<String>,
    pub rating: Option<RatingValue>,
    pub user_location: MapPoint,
    pub is_private: bool,
    pub photos: Vec<NewCheckinPhoto>,
}

#[derive(Debug, Clone)]
pub struct Storable(Checkin, Vec<CheckinPhoto>);

impl Storable {
    pub fn checkin_id(&self) -> &Id {
        &self.0.id
    }
}

/// Validate all preconditions of a new check-in and assemble the rows
/// to be stored. No repository writes happen here.
pub fn prepare_new_checkin<D: Db>(
    db: &D,
    geo: &dyn GeoValidationGateway,
    actor_id: &Id,
    c: NewCheckin,
    policy: &CheckinPolicy,
) -> Result<Storable> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let place = db
        .get_place(&c.place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    if place.status != PlaceStatus::Published {
        return Err(Error::PlaceNotPublished);
    }
    if let Some(comment) = &c.comment {
        if !validate::is_valid_comment(comment) {
            return Err(Error::CommentLength);
        }
    }
    if let Some(rating) = c.rating {
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
    }
    if c.photos.len() > policy.max_photos {
        return Err(Error::PhotoLimitExceeded);
    }
    for photo in &c.photos {
        if let Some(caption) = &photo.caption {
            if !validate::is_valid_caption(caption) {
                return Err(Error::CaptionLength);
            }
        }
    }
    match geo.validate_user_location(c.user_location, place.pos, policy.max_distance) {
        Ok(true) => (),
        Ok(false) => return Err(Error::CheckinTooFar),
        Err(err) => {
            warn!("Could not validate user location: {err}");
            return Err(Error::LocationValidationFailed);
        }
    }
    let now = Timestamp::now();
    let checkin_id = Id::new();
    let photos = c
        .photos
        .into_iter()
        .map(|p| CheckinPhoto {
            id: Id::new(),
            checkin_id: checkin_id.clone(),
            url: p.url,
            caption: p.caption,
        })
        .collect();
    let checkin = Checkin {
        id: checkin_id,
        user_id: actor.id,
        place_id: place.id,
        comment: c.comment,
        rating: c.rating,
        user_location: c.user_location,
        is_private: c.is_private,
        status: CheckinStatus::Active,
        created_at: now,
        updated_at: now,
    };
    Ok(Storable(checkin, photos))
}

/// Store a prepared check-in together with its photos and bring the
/// place's derived figures up to date. All writes belong into one
/// transaction.
pub fn store_new_checkin<D: Db>(db: &D, s: Storable) -> Result<(Checkin, Vec<CheckinPhoto>)> {
    let Storable(checkin, photos) = s;
    db.create_checkin(checkin.clone())?;
    for photo in &photos {
        debug_assert_eq!(photo.checkin_id, checkin.id);
        db.add_photo(photo.clone())?;
    }
    refresh_place_stats(db, &checkin.place_id)?;
    Ok((checkin, photos))
}
