use super::prelude::*;
use crate::{
    usecases::{authorize_place_edit, authorize_user_by_id},
    util::validate,
};

/// Partial update of a place's descriptive fields.
///
/// `None` leaves a field untouched; an explicitly empty description
/// clears it. Identity, status, and the derived figures are not
/// reachable through this path at all.
#[derive(Debug, Default, Clone)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<PlaceCategory>,
    pub pos: Option<MapPoint>,
}

pub fn update_place<D: Db>(
    db: &D,
    actor_id: &Id,
    place_id: &Id,
    update: PlaceUpdate,
) -> Result<Place> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let mut place = db
        .get_place(place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    authorize_place_edit(db, &actor, &place)?;

    let PlaceUpdate {
        name,
        description,
        category,
        pos,
    } = update;
    if let Some(name) = name {
        if !validate::is_valid_name(&name) {
            return Err(Error::EmptyName);
        }
        place.name = name;
    }
    if let Some(description) = description {
        place.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
    }
    if let Some(category) = category {
        place.category = category;
    }
    if let Some(pos) = pos {
        place.pos = pos;
    }
    db.update_place(&place)?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    fn fixture() -> (MockDb, User, Place) {
        let db = MockDb::default();
        let owner = User::build().role(Role::Editor).finish();
        db.users.borrow_mut().push(owner.clone());
        let place = Place::build()
            .id("p")
            .created_by(owner.id.as_str())
            .name("Old name")
            .finish();
        db.places.borrow_mut().push(place.clone());
        (db, owner, place)
    }

    #[test]
    fn unspecified_fields_stay_untouched() {
        let (db, owner, place) = fixture();
        db.places.borrow_mut()[0].description = Some("keep me".into());
        let update = PlaceUpdate {
            name: Some("New name".into()),
            ..Default::default()
        };
        let updated = update_place(&db, &owner.id, &place.id, update).unwrap();
        assert_eq!("New name", updated.name);
        assert_eq!(Some("keep me"), updated.description.as_deref());
    }

    #[test]
    fn empty_description_clears_the_field() {
        let (db, owner, place) = fixture();
        db.places.borrow_mut()[0].description = Some("old".into());
        let update = PlaceUpdate {
            description: Some("".into()),
            ..Default::default()
        };
        let updated = update_place(&db, &owner.id, &place.id, update).unwrap();
        assert_eq!(None, updated.description);
    }

    #[test]
    fn counters_survive_updates() {
        let (db, owner, place) = fixture();
        db.places.borrow_mut()[0].checkin_count = 7;
        let update = PlaceUpdate {
            category: Some(PlaceCategory::Food),
            ..Default::default()
        };
        let updated = update_place(&db, &owner.id, &place.id, update).unwrap();
        assert_eq!(7, updated.checkin_count);
    }

    #[test]
    fn pending_editor_invitation_grants_edit() {
        let (db, _, place) = fixture();
        let invitee = User::build().finish();
        db.users.borrow_mut().push(invitee.clone());
        db.permissions.borrow_mut().push(PlacePermission {
            id: Id::new(),
            place_id: place.id.clone(),
            user_id: invitee.id.clone(),
            can_edit: true,
            can_delete: false,
            invited_by: place.created_by.clone(),
            invited_at: Timestamp::now(),
            accepted_at: None,
        });
        let update = PlaceUpdate {
            name: Some("Renamed by invitee".into()),
            ..Default::default()
        };
        // Acceptance is not required on the edit path.
        assert!(update_place(&db, &invitee.id, &place.id, update).is_ok());
    }

    #[test]
    fn strangers_are_denied() {
        let (db, _, place) = fixture();
        let stranger = User::build().finish();
        db.users.borrow_mut().push(stranger.clone());
        let update = PlaceUpdate {
            name: Some("Nope".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_place(&db, &stranger.id, &place.id, update),
            Err(Error::InsufficientPermissions)
        ));
    }
}
