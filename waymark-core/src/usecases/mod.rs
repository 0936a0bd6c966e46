mod authorize;
mod change_status;
mod change_user_role;
mod create_checkin;
mod create_place;
mod create_region;
mod delete_checkin;
mod delete_place;
mod delete_region;
mod edit_permissions;
mod error;
mod invite_editor;
mod moderate_checkin;
mod refresh_stats;
mod update_checkin;
mod update_place;
mod update_region;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, change_status::*, change_user_role::*, create_checkin::*, create_place::*,
    create_region::*,
    delete_checkin::*, delete_place::*, delete_region::*, edit_permissions::*, error::Error,
    invite_editor::*, moderate_checkin::*, refresh_stats::*, update_checkin::*, update_place::*,
    update_region::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

pub(crate) fn map_not_found(err: RepoError, not_found: Error) -> Error {
    match err {
        RepoError::NotFound => not_found,
        err => Error::Repo(err),
    }
}

pub fn get_region<R: RegionRepo>(repo: &R, id: &Id) -> Result<Region> {
    repo.get_region(id)
        .map_err(|err| map_not_found(err, Error::RegionNotFound))
}

pub fn get_place<R: PlaceRepo>(repo: &R, id: &Id) -> Result<Place> {
    repo.get_place(id)
        .map_err(|err| map_not_found(err, Error::PlaceNotFound))
}

pub fn get_checkin<R>(repo: &R, id: &Id) -> Result<(Checkin, Vec<CheckinPhoto>)>
where
    R: CheckinRepo + CheckinPhotoRepo,
{
    let checkin = repo
        .get_checkin(id)
        .map_err(|err| map_not_found(err, Error::CheckinNotFound))?;
    let photos = repo.photos_of_checkin(&checkin.id)?;
    Ok((checkin, photos))
}

pub fn checkins_of_place<R: CheckinRepo>(repo: &R, place_id: &Id) -> Result<Vec<Checkin>> {
    Ok(repo.get_checkins_of_place(place_id)?)
}

pub fn checkins_of_user<R: CheckinRepo>(repo: &R, user_id: &Id) -> Result<Vec<Checkin>> {
    Ok(repo.get_checkins_of_user(user_id)?)
}

pub fn map_locations<R: PlaceRepo>(repo: &R) -> Result<Vec<MapLocation>> {
    Ok(repo.map_locations()?)
}

pub fn shared_places_of_user<R>(repo: &R, user_id: &Id) -> Result<Vec<Place>>
where
    R: PlacePermissionRepo + PlaceRepo,
{
    let ids = repo.shared_places_of_user(user_id)?;
    let mut places = Vec::with_capacity(ids.len());
    for id in &ids {
        places.push(get_place(repo, id)?);
    }
    Ok(places)
}
