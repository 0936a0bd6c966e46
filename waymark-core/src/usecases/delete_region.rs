use super::prelude::*;
use crate::usecases::authorize_user_by_id;

/// A region can only be deleted once it no longer contains any place.
pub fn delete_region<D: Db>(db: &D, actor_id: &Id, region_id: &Id) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let region = db
        .get_region(region_id)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))?;
    if region.created_by != actor.id && actor.role != Role::Admin {
        return Err(Error::InsufficientPermissions);
    }
    if db.count_places_of_region(region_id)? > 0 {
        return Err(Error::ContentHasDependencies);
    }
    db.delete_region(region_id)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))
}
