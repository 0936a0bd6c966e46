use super::prelude::*;
use crate::{
    usecases::{authorize_min_role, authorize_user_by_id},
    util::validate,
};

#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub description: Option<String>,
}

pub fn create_region<D: Db>(db: &D, actor_id: &Id, r: NewRegion) -> Result<Region> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Editor)?;
    if !validate::is_valid_name(&r.name) {
        return Err(Error::EmptyName);
    }
    let region = Region {
        id: Id::new(),
        name: r.name,
        description: r.description.filter(|d| !d.is_empty()),
        created_by: actor.id,
        status: RegionStatus::Draft,
        place_count: 0,
        favorite_count: 0,
        created_at: Timestamp::now(),
    };
    db.create_region(region.clone())?;
    Ok(region)
}
