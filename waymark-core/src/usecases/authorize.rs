use super::prelude::*;
use crate::authorization;

/// Resolve the acting user and verify that the account may mutate
/// anything at all. Every mutating use case starts here.
pub fn authorize_user_by_id<D: UserRepo>(db: &D, user_id: &Id) -> Result<User> {
    let user = db
        .get_user(user_id)
        .map_err(|err| super::map_not_found(err, Error::UserNotFound))?;
    authorization::user::authorize_active(&user)?;
    Ok(user)
}

pub fn authorize_min_role(user: &User, min_required_role: Role) -> Result<()> {
    authorization::user::authorize_role(user, min_required_role)?;
    Ok(())
}

/// Edit access on a place: creator, admin, or a delegated permission
/// row with the edit capability.
pub fn authorize_place_edit<D: PlacePermissionRepo>(
    db: &D,
    actor: &User,
    place: &Place,
) -> Result<()> {
    let permission = db.permission_of_user_and_place(&actor.id, &place.id)?;
    authorization::place::authorize_place_edit(actor, place, permission.as_ref())?;
    Ok(())
}

/// Delete access on a place: creator, admin, or an accepted delegated
/// permission row with the delete capability.
pub fn authorize_place_delete<D: PlacePermissionRepo>(
    db: &D,
    actor: &User,
    place: &Place,
) -> Result<()> {
    let permission = db.permission_of_user_and_place(&actor.id, &place.id)?;
    authorization::place::authorize_place_delete(actor, place, permission.as_ref())?;
    Ok(())
}
