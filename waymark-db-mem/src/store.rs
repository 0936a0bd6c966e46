use parking_lot::RwLock;

use waymark_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

/// Plain table-per-entity storage. Rows keep their insertion order,
/// which is the only ordering guarantee the repositories give.
#[derive(Debug, Default)]
pub struct Store {
    users: RwLock<Vec<User>>,
    regions: RwLock<Vec<Region>>,
    places: RwLock<Vec<Place>>,
    checkins: RwLock<Vec<Checkin>>,
    photos: RwLock<Vec<CheckinPhoto>>,
    permissions: RwLock<Vec<PlacePermission>>,
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            users: RwLock::new(self.users.read().clone()),
            regions: RwLock::new(self.regions.read().clone()),
            places: RwLock::new(self.places.read().clone()),
            checkins: RwLock::new(self.checkins.read().clone()),
            photos: RwLock::new(self.photos.read().clone()),
            permissions: RwLock::new(self.permissions.read().clone()),
        }
    }
}

fn insert_unique<T>(rows: &RwLock<Vec<T>>, row: T, same: impl Fn(&T, &T) -> bool) -> Result<()> {
    let mut rows = rows.write();
    if rows.iter().any(|existing| same(existing, &row)) {
        return Err(Error::AlreadyExists);
    }
    rows.push(row);
    Ok(())
}

fn select<T: Clone>(rows: &RwLock<Vec<T>>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    rows.read().iter().filter(|row| pred(row)).cloned().collect()
}

fn select_one<T: Clone>(rows: &RwLock<Vec<T>>, pred: impl Fn(&T) -> bool) -> Result<T> {
    rows.read()
        .iter()
        .find(|row| pred(row))
        .cloned()
        .ok_or(Error::NotFound)
}

fn modify_one<T>(rows: &RwLock<Vec<T>>, pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> Result<()> {
    let mut rows = rows.write();
    let row = rows.iter_mut().find(|row| pred(row)).ok_or(Error::NotFound)?;
    f(row);
    Ok(())
}

fn remove_one<T>(rows: &RwLock<Vec<T>>, pred: impl Fn(&T) -> bool) -> Result<()> {
    let mut rows = rows.write();
    let idx = rows.iter().position(pred).ok_or(Error::NotFound)?;
    rows.remove(idx);
    Ok(())
}

impl UserRepo for Store {
    fn create_user(&self, user: User) -> Result<()> {
        insert_unique(&self.users, user, |a, b| a.id == b.id)
    }
    fn get_user(&self, id: &Id) -> Result<User> {
        select_one(&self.users, |u| &u.id == id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }
    fn update_user_role(&self, id: &Id, role: Role) -> Result<()> {
        modify_one(&self.users, |u| &u.id == id, |u| u.role = role)
    }
    fn update_user_status(&self, id: &Id, status: UserStatus) -> Result<()> {
        modify_one(&self.users, |u| &u.id == id, |u| u.status = status)
    }
    fn count_users(&self) -> Result<usize> {
        Ok(self.users.read().len())
    }
}

impl RegionRepo for Store {
    fn create_region(&self, region: Region) -> Result<()> {
        insert_unique(&self.regions, region, |a, b| a.id == b.id)
    }
    fn get_region(&self, id: &Id) -> Result<Region> {
        select_one(&self.regions, |r| &r.id == id)
    }
    fn update_region(&self, region: &Region) -> Result<()> {
        modify_one(&self.regions, |r| r.id == region.id, |r| *r = region.clone())
    }
    fn update_region_status(&self, id: &Id, status: RegionStatus) -> Result<()> {
        modify_one(&self.regions, |r| &r.id == id, |r| r.status = status)
    }
    fn update_region_place_count(&self, id: &Id, place_count: u64) -> Result<()> {
        modify_one(
            &self.regions,
            |r| &r.id == id,
            |r| r.place_count = place_count,
        )
    }
    fn delete_region(&self, id: &Id) -> Result<()> {
        remove_one(&self.regions, |r| &r.id == id)
    }
    fn all_regions(&self) -> Result<Vec<Region>> {
        Ok(self.regions.read().clone())
    }
}

impl PlaceRepo for Store {
    fn create_place(&self, place: Place) -> Result<()> {
        insert_unique(&self.places, place, |a, b| a.id == b.id)
    }
    fn get_place(&self, id: &Id) -> Result<Place> {
        select_one(&self.places, |p| &p.id == id)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        modify_one(&self.places, |p| p.id == place.id, |p| *p = place.clone())
    }
    fn update_place_status(&self, id: &Id, status: PlaceStatus) -> Result<()> {
        modify_one(&self.places, |p| &p.id == id, |p| p.status = status)
    }
    fn update_place_checkin_stats(&self, id: &Id, stats: &PlaceCheckinStats) -> Result<()> {
        modify_one(
            &self.places,
            |p| &p.id == id,
            |p| {
                p.checkin_count = stats.checkin_count;
                p.avg_rating = stats.avg_rating;
            },
        )
    }
    fn increment_place_visit_count(&self, id: &Id) -> Result<u64> {
        let mut places = self.places.write();
        let place = places
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(Error::NotFound)?;
        place.visit_count += 1;
        Ok(place.visit_count)
    }
    fn delete_place(&self, id: &Id) -> Result<()> {
        remove_one(&self.places, |p| &p.id == id)
    }
    fn get_places_of_region(&self, region_id: &Id) -> Result<Vec<Place>> {
        Ok(select(&self.places, |p| &p.region_id == region_id))
    }
    fn count_places_of_region(&self, region_id: &Id) -> Result<u64> {
        Ok(self
            .places
            .read()
            .iter()
            .filter(|p| &p.region_id == region_id)
            .count() as u64)
    }
    fn get_places_of_creator(&self, user_id: &Id) -> Result<Vec<Place>> {
        Ok(select(&self.places, |p| &p.created_by == user_id))
    }
    fn map_locations(&self) -> Result<Vec<MapLocation>> {
        Ok(self
            .places
            .read()
            .iter()
            .map(|p| MapLocation {
                id: p.id.clone(),
                pos: p.pos,
            })
            .collect())
    }
}

impl CheckinRepo for Store {
    fn create_checkin(&self, checkin: Checkin) -> Result<()> {
        insert_unique(&self.checkins, checkin, |a, b| a.id == b.id)
    }
    fn get_checkin(&self, id: &Id) -> Result<Checkin> {
        select_one(&self.checkins, |c| &c.id == id)
    }
    fn update_checkin(&self, checkin: &Checkin) -> Result<()> {
        modify_one(
            &self.checkins,
            |c| c.id == checkin.id,
            |c| *c = checkin.clone(),
        )
    }
    fn update_checkin_status(&self, id: &Id, status: CheckinStatus) -> Result<()> {
        modify_one(&self.checkins, |c| &c.id == id, |c| c.status = status)
    }
    fn delete_checkin(&self, id: &Id) -> Result<()> {
        remove_one(&self.checkins, |c| &c.id == id)
    }
    fn get_checkins_of_user(&self, user_id: &Id) -> Result<Vec<Checkin>> {
        Ok(select(&self.checkins, |c| {
            &c.user_id == user_id && c.status.counts()
        }))
    }
    fn get_checkins_of_place(&self, place_id: &Id) -> Result<Vec<Checkin>> {
        Ok(select(&self.checkins, |c| {
            &c.place_id == place_id && c.status.counts()
        }))
    }
    fn has_user_checked_in(&self, user_id: &Id, place_id: &Id) -> Result<bool> {
        Ok(self
            .checkins
            .read()
            .iter()
            .any(|c| &c.user_id == user_id && &c.place_id == place_id && c.status.counts()))
    }
    fn count_active_checkins_of_place(&self, place_id: &Id) -> Result<u64> {
        Ok(self
            .checkins
            .read()
            .iter()
            .filter(|c| &c.place_id == place_id && c.status == CheckinStatus::Active)
            .count() as u64)
    }
    fn place_checkin_stats(&self, place_id: &Id) -> Result<PlaceCheckinStats> {
        let checkins = self.checkins.read();
        let checkin_count = checkins
            .iter()
            .filter(|c| &c.place_id == place_id && c.status.counts())
            .count() as u64;
        let avg_rating = checkins
            .iter()
            .filter(|c| &c.place_id == place_id && c.status == CheckinStatus::Active)
            .filter_map(|c| c.rating)
            .fold(AvgRatingBuilder::default(), |mut avg, rating| {
                avg += rating;
                avg
            })
            .build();
        Ok(PlaceCheckinStats {
            checkin_count,
            avg_rating,
        })
    }
}

impl CheckinPhotoRepo for Store {
    fn add_photo(&self, photo: CheckinPhoto) -> Result<()> {
        insert_unique(&self.photos, photo, |a, b| a.id == b.id)
    }
    fn get_photo(&self, id: &Id) -> Result<CheckinPhoto> {
        select_one(&self.photos, |p| &p.id == id)
    }
    fn photos_of_checkin(&self, checkin_id: &Id) -> Result<Vec<CheckinPhoto>> {
        Ok(select(&self.photos, |p| &p.checkin_id == checkin_id))
    }
    fn update_photo_caption(&self, id: &Id, caption: Option<&str>) -> Result<()> {
        modify_one(
            &self.photos,
            |p| &p.id == id,
            |p| p.caption = caption.map(Into::into),
        )
    }
    fn delete_photo(&self, id: &Id) -> Result<()> {
        remove_one(&self.photos, |p| &p.id == id)
    }
    fn delete_photos_of_checkin(&self, checkin_id: &Id) -> Result<usize> {
        let mut photos = self.photos.write();
        let before = photos.len();
        photos.retain(|p| &p.checkin_id != checkin_id);
        Ok(before - photos.len())
    }
}

impl PlacePermissionRepo for Store {
    fn create_permission(&self, permission: PlacePermission) -> Result<()> {
        insert_unique(&self.permissions, permission, |a, b| {
            a.id == b.id || (a.user_id == b.user_id && a.place_id == b.place_id)
        })
    }
    fn get_permission(&self, id: &Id) -> Result<PlacePermission> {
        select_one(&self.permissions, |p| &p.id == id)
    }
    fn update_permission(&self, permission: &PlacePermission) -> Result<()> {
        modify_one(
            &self.permissions,
            |p| p.id == permission.id,
            |p| *p = permission.clone(),
        )
    }
    fn delete_permission(&self, id: &Id) -> Result<()> {
        remove_one(&self.permissions, |p| &p.id == id)
    }
    fn permission_of_user_and_place(
        &self,
        user_id: &Id,
        place_id: &Id,
    ) -> Result<Option<PlacePermission>> {
        Ok(self
            .permissions
            .read()
            .iter()
            .find(|p| &p.user_id == user_id && &p.place_id == place_id)
            .cloned())
    }
    fn permissions_of_place(&self, place_id: &Id) -> Result<Vec<PlacePermission>> {
        Ok(select(&self.permissions, |p| &p.place_id == place_id))
    }
    fn shared_places_of_user(&self, user_id: &Id) -> Result<Vec<Id>> {
        Ok(self
            .permissions
            .read()
            .iter()
            .filter(|p| &p.user_id == user_id)
            .map(|p| p.place_id.clone())
            .collect())
    }
}
