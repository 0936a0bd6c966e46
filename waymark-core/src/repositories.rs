// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: User) -> Result<()>;
    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn update_user_role(&self, id: &Id, role: Role) -> Result<()>;
    fn update_user_status(&self, id: &Id, status: UserStatus) -> Result<()>;
    fn count_users(&self) -> Result<usize>;
}

pub trait RegionRepo {
    fn create_region(&self, region: Region) -> Result<()>;
    fn get_region(&self, id: &Id) -> Result<Region>;
    fn update_region(&self, region: &Region) -> Result<()>;
    fn update_region_status(&self, id: &Id, status: RegionStatus) -> Result<()>;
    fn update_region_place_count(&self, id: &Id, place_count: u64) -> Result<()>;
    fn delete_region(&self, id: &Id) -> Result<()>;
    fn all_regions(&self) -> Result<Vec<Region>>;
}

/// Reduced place representation for map rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLocation {
    pub id: Id,
    pub pos: MapPoint,
}

pub trait PlaceRepo {
    fn create_place(&self, place: Place) -> Result<()>;
    fn get_place(&self, id: &Id) -> Result<Place>;
    fn update_place(&self, place: &Place) -> Result<()>;
    fn update_place_status(&self, id: &Id, status: PlaceStatus) -> Result<()>;
    fn update_place_checkin_stats(&self, id: &Id, stats: &PlaceCheckinStats) -> Result<()>;
    fn increment_place_visit_count(&self, id: &Id) -> Result<u64>;
    fn delete_place(&self, id: &Id) -> Result<()>;

    fn get_places_of_region(&self, region_id: &Id) -> Result<Vec<Place>>;
    fn count_places_of_region(&self, region_id: &Id) -> Result<u64>;
    fn get_places_of_creator(&self, user_id: &Id) -> Result<Vec<Place>>;
    fn map_locations(&self) -> Result<Vec<MapLocation>>;
}

/// Aggregated check-in figures of a single place, computed by the
/// backing store instead of loading every check-in row.
///
/// `checkin_count` counts all non-deleted check-ins; `avg_rating` is
/// the mean over the rated *active* check-ins and unset if there is
/// no such check-in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceCheckinStats {
    pub checkin_count: u64,
    pub avg_rating: Option<AvgRating>,
}

pub trait CheckinRepo {
    fn create_checkin(&self, checkin: Checkin) -> Result<()>;
    fn get_checkin(&self, id: &Id) -> Result<Checkin>;
    fn update_checkin(&self, checkin: &Checkin) -> Result<()>;
    fn update_checkin_status(&self, id: &Id, status: CheckinStatus) -> Result<()>;
    fn delete_checkin(&self, id: &Id) -> Result<()>;

    fn get_checkins_of_user(&self, user_id: &Id) -> Result<Vec<Checkin>>;
    fn get_checkins_of_place(&self, place_id: &Id) -> Result<Vec<Checkin>>;
    fn has_user_checked_in(&self, user_id: &Id, place_id: &Id) -> Result<bool>;
    fn count_active_checkins_of_place(&self, place_id: &Id) -> Result<u64>;
    fn place_checkin_stats(&self, place_id: &Id) -> Result<PlaceCheckinStats>;
}

pub trait CheckinPhotoRepo {
    fn add_photo(&self, photo: CheckinPhoto) -> Result<()>;
    fn get_photo(&self, id: &Id) -> Result<CheckinPhoto>;

    // Photos are returned in the order they were added.
    fn photos_of_checkin(&self, checkin_id: &Id) -> Result<Vec<CheckinPhoto>>;

    fn update_photo_caption(&self, id: &Id, caption: Option<&str>) -> Result<()>;
    fn delete_photo(&self, id: &Id) -> Result<()>;
    fn delete_photos_of_checkin(&self, checkin_id: &Id) -> Result<usize>;
}

pub trait PlacePermissionRepo {
    fn create_permission(&self, permission: PlacePermission) -> Result<()>;
    fn get_permission(&self, id: &Id) -> Result<PlacePermission>;
    fn update_permission(&self, permission: &PlacePermission) -> Result<()>;
    fn delete_permission(&self, id: &Id) -> Result<()>;

    fn permission_of_user_and_place(
        &self,
        user_id: &Id,
        place_id: &Id,
    ) -> Result<Option<PlacePermission>>;
    fn permissions_of_place(&self, place_id: &Id) -> Result<Vec<PlacePermission>>;
    fn shared_places_of_user(&self, user_id: &Id) -> Result<Vec<Id>>;
}
