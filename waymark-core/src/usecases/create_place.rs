use super::prelude::*;
use crate::{
    usecases::{authorize_min_role, authorize_user_by_id, refresh_region_place_count},
    util::validate,
};

#[derive(Debug, Clone)]
pub struct NewPlace {
    pub region_id: Id,
    pub name: String,
    pub description: Option<String>,
    pub category: PlaceCategory,
    pub lat: f64,
    pub lng: f64,
}

/// Creating a place requires the editor role and ownership of the
/// parent region (or the admin override). The new place starts as a
/// draft with all derived figures at zero; the region's place count is
/// brought up to date in the same transaction.
pub fn create_place<D: Db>(db: &D, actor_id: &Id, p: NewPlace) -> Result<Place> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Editor)?;
    let region = db
        .get_region(&p.region_id)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))?;
    if region.created_by != actor.id && actor.role != Role::Admin {
        return Err(Error::InsufficientPermissions);
    }
    if !validate::is_valid_name(&p.name) {
        return Err(Error::EmptyName);
    }
    let Some(pos) = MapPoint::try_from_lat_lng_deg(p.lat, p.lng) else {
        return Err(Error::InvalidPosition);
    };
    let place = Place {
        id: Id::new(),
        region_id: region.id.clone(),
        created_by: actor.id,
        name: p.name,
        description: p.description.filter(|d| !d.is_empty()),
        category: p.category,
        pos,
        status: PlaceStatus::Draft,
        checkin_count: 0,
        favorite_count: 0,
        visit_count: 0,
        avg_rating: None,
        created_at: Timestamp::now(),
    };
    db.create_place(place.clone())?;
    refresh_region_place_count(db, &region.id)?;
    Ok(place)
}
