use super::prelude::*;
use crate::usecases::{authorize_min_role, authorize_user_by_id, refresh_place_stats};

/// Soft delete: the row stays, the status becomes terminal for all
/// soft operations. Owner or admin.
pub fn delete_checkin<D: Db>(db: &D, actor_id: &Id, checkin_id: &Id) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let checkin = db
        .get_checkin(checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))?;
    if checkin.status == CheckinStatus::Deleted {
        return Err(Error::CheckinAlreadyDeleted);
    }
    if checkin.user_id != actor.id && actor.role != Role::Admin {
        return Err(Error::InsufficientPermissions);
    }
    db.update_checkin_status(checkin_id, CheckinStatus::Deleted)?;
    refresh_place_stats(db, &checkin.place_id)?;
    Ok(())
}

/// Hard delete: photos and row are physically removed. Admin only.
///
/// Safe to run on an already soft-deleted check-in; the place stats
/// were reconciled by the soft delete then and are left alone.
pub fn hard_delete_checkin<D: Db>(db: &D, actor_id: &Id, checkin_id: &Id) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Admin)?;
    let checkin = db
        .get_checkin(checkin_id)
        .map_err(|err| super::map_not_found(err, Error::CheckinNotFound))?;
    let already_reconciled = checkin.status == CheckinStatus::Deleted;
    db.delete_photos_of_checkin(checkin_id)?;
    db.delete_checkin(checkin_id)?;
    if !already_reconciled {
        refresh_place_stats(db, &checkin.place_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    fn fixture() -> (MockDb, User, User) {
        let db = MockDb::default();
        let owner = User::build().finish();
        let admin = User::build().role(Role::Admin).finish();
        db.users.borrow_mut().push(owner.clone());
        db.users.borrow_mut().push(admin.clone());
        db.places.borrow_mut().push(
            Place::build()
                .id("p")
                .status(PlaceStatus::Published)
                .finish(),
        );
        (db, owner, admin)
    }

    fn add_rated_checkin(db: &MockDb, id: &str, owner: &User, rating: i8) {
        db.checkins.borrow_mut().push(
            Checkin::build()
                .id(id)
                .user(owner.id.as_str())
                .place("p")
                .rating(Some(RatingValue::from(rating)))
                .finish(),
        );
    }

    #[test]
    fn owner_soft_delete_reconciles_stats() {
        let (db, owner, _) = fixture();
        add_rated_checkin(&db, "c1", &owner, 4);
        add_rated_checkin(&db, "c2", &owner, 2);
        refresh_place_stats(&db, &"p".into()).unwrap();
        assert_eq!(2, db.places.borrow()[0].checkin_count);

        delete_checkin(&db, &owner.id, &"c1".into()).unwrap();
        let place = db.places.borrow()[0].clone();
        assert_eq!(1, place.checkin_count);
        assert_eq!(Some(AvgRating::from(2.0)), place.avg_rating);
    }

    #[test]
    fn deleting_the_only_rated_checkin_unsets_the_average() {
        let (db, owner, _) = fixture();
        add_rated_checkin(&db, "c", &owner, 4);
        refresh_place_stats(&db, &"p".into()).unwrap();
        assert_eq!(
            Some(AvgRating::from(4.0)),
            db.places.borrow()[0].avg_rating
        );

        delete_checkin(&db, &owner.id, &"c".into()).unwrap();
        let place = db.places.borrow()[0].clone();
        assert_eq!(0, place.checkin_count);
        assert_eq!(None, place.avg_rating);
    }

    #[test]
    fn double_soft_delete_fails() {
        let (db, owner, _) = fixture();
        add_rated_checkin(&db, "c", &owner, 3);
        delete_checkin(&db, &owner.id, &"c".into()).unwrap();
        assert!(matches!(
            delete_checkin(&db, &owner.id, &"c".into()),
            Err(Error::CheckinAlreadyDeleted)
        ));
    }

    #[test]
    fn strangers_cannot_soft_delete() {
        let (db, owner, _) = fixture();
        add_rated_checkin(&db, "c", &owner, 3);
        let stranger = User::build().finish();
        db.users.borrow_mut().push(stranger.clone());
        assert!(matches!(
            delete_checkin(&db, &stranger.id, &"c".into()),
            Err(Error::InsufficientPermissions)
        ));
    }

    #[test]
    fn admin_may_soft_delete_foreign_checkins() {
        let (db, owner, admin) = fixture();
        add_rated_checkin(&db, "c", &owner, 3);
        delete_checkin(&db, &admin.id, &"c".into()).unwrap();
        assert_eq!(CheckinStatus::Deleted, db.checkins.borrow()[0].status);
    }

    #[test]
    fn hard_delete_removes_row_and_photos() {
        let (db, owner, admin) = fixture();
        add_rated_checkin(&db, "c", &owner, 5);
        db.photos.borrow_mut().push(CheckinPhoto {
            id: "ph".into(),
            checkin_id: "c".into(),
            url: "https://img.example.org/1.jpg".parse().unwrap(),
            caption: None,
        });
        refresh_place_stats(&db, &"p".into()).unwrap();

        hard_delete_checkin(&db, &admin.id, &"c".into()).unwrap();
        assert!(db.checkins.borrow().is_empty());
        assert!(db.photos.borrow().is_empty());
        let place = db.places.borrow()[0].clone();
        assert_eq!(0, place.checkin_count);
        assert_eq!(None, place.avg_rating);
    }

    #[test]
    fn hard_delete_requires_admin() {
        let (db, owner, _) = fixture();
        add_rated_checkin(&db, "c", &owner, 5);
        assert!(matches!(
            hard_delete_checkin(&db, &owner.id, &"c".into()),
            Err(Error::InsufficientPermissions)
        ));
    }

    #[test]
    fn hard_delete_after_soft_delete_reconciles_stats_exactly_once() {
        let (db, owner, admin) = fixture();
        add_rated_checkin(&db, "c", &owner, 5);
        delete_checkin(&db, &owner.id, &"c".into()).unwrap();
        let stats_after_soft = db.places.borrow()[0].clone();

        hard_delete_checkin(&db, &admin.id, &"c".into()).unwrap();
        let place = db.places.borrow()[0].clone();
        assert!(db.checkins.borrow().is_empty());
        assert_eq!(stats_after_soft.checkin_count, place.checkin_count);
        assert_eq!(stats_after_soft.avg_rating, place.avg_rating);
    }
}
