use log::info;

use super::prelude::*;
use crate::usecases::{authorize_place_delete, authorize_user_by_id, refresh_region_place_count};

/// Deleting a place is blocked while it still carries an active
/// check-in. Hidden, reported, and deleted check-ins do not block.
/// Of two concurrent delete attempts only one observes the row; the
/// other fails with `PlaceNotFound`.
pub fn delete_place<D: Db>(db: &D, actor_id: &Id, place_id: &Id) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let place = db
        .get_place(place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    authorize_place_delete(db, &actor, &place)?;
    if db.count_active_checkins_of_place(place_id)? > 0 {
        return Err(Error::ContentHasDependencies);
    }
    // Delegated permissions are bound to the place and go with it.
    let permissions = db.permissions_of_place(place_id)?;
    for permission in &permissions {
        db.delete_permission(&permission.id)?;
    }
    info!(
        "Deleting place {} and {} of its permissions",
        place.id,
        permissions.len()
    );
    db.delete_place(place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    refresh_region_place_count(db, &place.region_id)?;
    Ok(())
}
