use log::info;

use super::prelude::*;
use crate::usecases::{authorize_place_edit, authorize_user_by_id};

/// Publishing and archiving are deliberately separate from the field
/// updates; the status is immutable through the update path.
pub fn change_place_status<D: Db>(
    db: &D,
    actor_id: &Id,
    place_id: &Id,
    status: PlaceStatus,
) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let place = db
        .get_place(place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    authorize_place_edit(db, &actor, &place)?;
    info!(
        "Changing status of place {} from {} to {}",
        place.id, place.status, status
    );
    Ok(db.update_place_status(place_id, status)?)
}

pub fn change_region_status<D: Db>(
    db: &D,
    actor_id: &Id,
    region_id: &Id,
    status: RegionStatus,
) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let region = db
        .get_region(region_id)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))?;
    if region.created_by != actor.id && actor.role != Role::Admin {
        return Err(Error::InsufficientPermissions);
    }
    info!(
        "Changing status of region {} from {} to {}",
        region.id, region.status, status
    );
    Ok(db.update_region_status(region_id, status)?)
}
