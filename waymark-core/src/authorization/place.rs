use waymark_entities::{
    permission::PlacePermission,
    place::Place,
    user::{Role, User},
};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not allowed to edit this place")]
    EditDenied,
    #[error("not allowed to delete this place")]
    DeleteDenied,
}

pub type Result<T> = StdResult<T, Error>;

/// Editing: creator, admin, or a delegated permission with the edit
/// capability. The mere existence of the permission row suffices on
/// this path, i.e. an invitation that has not been accepted yet
/// already carries it.
pub fn authorize_place_edit(
    actor: &User,
    place: &Place,
    permission: Option<&PlacePermission>,
) -> Result<()> {
    if actor.role == Role::Admin || place.created_by == actor.id {
        return Ok(());
    }
    if permission.is_some_and(|p| p.can_edit) {
        return Ok(());
    }
    Err(Error::EditDenied)
}

/// Deleting: creator, admin, or an *accepted* delegated permission
/// with the delete capability.
pub fn authorize_place_delete(
    actor: &User,
    place: &Place,
    permission: Option<&PlacePermission>,
) -> Result<()> {
    if actor.role == Role::Admin || place.created_by == actor.id {
        return Ok(());
    }
    if permission.is_some_and(|p| p.can_delete && p.is_accepted()) {
        return Ok(());
    }
    Err(Error::DeleteDenied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_entities::{builders::*, id::Id, time::Timestamp};

    fn permission(user: &User, place: &Place, can_edit: bool, can_delete: bool) -> PlacePermission {
        PlacePermission {
            id: Id::new(),
            place_id: place.id.clone(),
            user_id: user.id.clone(),
            can_edit,
            can_delete,
            invited_by: place.created_by.clone(),
            invited_at: Timestamp::now(),
            accepted_at: None,
        }
    }

    #[test]
    fn creator_and_admin_may_edit_and_delete() {
        let creator = User::build().role(Role::Editor).finish();
        let admin = User::build().role(Role::Admin).finish();
        let place = Place::build().created_by(creator.id.as_str()).finish();
        assert!(authorize_place_edit(&creator, &place, None).is_ok());
        assert!(authorize_place_delete(&creator, &place, None).is_ok());
        assert!(authorize_place_edit(&admin, &place, None).is_ok());
        assert!(authorize_place_delete(&admin, &place, None).is_ok());
    }

    #[test]
    fn strangers_are_denied() {
        let stranger = User::build().role(Role::Editor).finish();
        let place = Place::build().created_by("somebody-else").finish();
        assert!(authorize_place_edit(&stranger, &place, None).is_err());
        assert!(authorize_place_delete(&stranger, &place, None).is_err());
    }

    #[test]
    fn pending_permission_grants_edit_but_not_delete() {
        let invitee = User::build().role(Role::Editor).finish();
        let place = Place::build().created_by("owner").finish();
        let pending = permission(&invitee, &place, true, true);
        assert!(authorize_place_edit(&invitee, &place, Some(&pending)).is_ok());
        assert!(authorize_place_delete(&invitee, &place, Some(&pending)).is_err());

        let accepted = PlacePermission {
            accepted_at: Some(Timestamp::now()),
            ..pending
        };
        assert!(authorize_place_delete(&invitee, &place, Some(&accepted)).is_ok());
    }

    #[test]
    fn permission_flags_are_respected() {
        let invitee = User::build().role(Role::Editor).finish();
        let place = Place::build().created_by("owner").finish();
        let mut p = permission(&invitee, &place, false, false);
        p.accepted_at = Some(Timestamp::now());
        assert!(authorize_place_edit(&invitee, &place, Some(&p)).is_err());
        assert!(authorize_place_delete(&invitee, &place, Some(&p)).is_err());
    }
}
