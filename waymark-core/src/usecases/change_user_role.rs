use log::info;

use super::prelude::*;
use crate::usecases::{authorize_min_role, authorize_user_by_id};

/// Admin action: promote or demote another account.
pub fn change_user_role<D: UserRepo>(
    db: &D,
    actor_id: &Id,
    user_id: &Id,
    role: Role,
) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Admin)?;
    let user = db
        .get_user(user_id)
        .map_err(|err| super::map_not_found(err, Error::UserNotFound))?;
    info!("Changing role of {} from {:?} to {:?}", user.id, user.role, role);
    Ok(db.update_user_role(user_id, role)?)
}

/// Admin action: suspend, restore, or (softly) delete an account.
/// Accounts are never physically removed by this core.
pub fn change_user_status<D: UserRepo>(
    db: &D,
    actor_id: &Id,
    user_id: &Id,
    status: UserStatus,
) -> Result<()> {
    let actor = authorize_user_by_id(db, actor_id)?;
    authorize_min_role(&actor, Role::Admin)?;
    let user = db
        .get_user(user_id)
        .map_err(|err| super::map_not_found(err, Error::UserNotFound))?;
    info!(
        "Changing status of {} from {:?} to {:?}",
        user.id, user.status, status
    );
    Ok(db.update_user_status(user_id, status)?)
}
