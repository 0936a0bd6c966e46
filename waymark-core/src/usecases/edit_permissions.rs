use super::prelude::*;
use crate::usecases::authorize_user_by_id;

/// Accept an invitation. The permission id is trusted — whoever holds
/// it may accept; there is no e-mail re-check at this step. Accepting
/// twice is harmless, the first acceptance timestamp wins.
pub fn accept_editor_invite<D: Db>(
    db: &D,
    actor_id: &Id,
    permission_id: &Id,
) -> Result<PlacePermission> {
    let _actor = authorize_user_by_id(db, actor_id)?;
    let mut permission = db
        .get_permission(permission_id)
        .map_err(|err| super::map_not_found(err, Error::PermissionNotFound))?;
    if permission.accepted_at.is_none() {
        permission.accepted_at = Some(Timestamp::now());
        db.update_permission(&permission)?;
    }
    Ok(permission)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PermissionUpdate {
    pub can_edit: Option<bool>,
    pub can_delete: Option<bool>,
}

impl PermissionUpdate {
    pub fn is_empty(&self) -> bool {
        let Self {
            can_edit,
            can_delete,
        } = self;
        can_edit.is_none() && can_delete.is_none()
    }
}

/// Change the capability flags of an existing permission. A stricter
/// inviter re-check is left to the caller.
pub fn update_editor_permission<D: Db>(
    db: &D,
    actor_id: &Id,
    permission_id: &Id,
    update: PermissionUpdate,
) -> Result<PlacePermission> {
    if update.is_empty() {
        return Err(Error::EmptyUpdate);
    }
    let _actor = authorize_user_by_id(db, actor_id)?;
    let mut permission = db
        .get_permission(permission_id)
        .map_err(|err| super::map_not_found(err, Error::PermissionNotFound))?;
    if let Some(can_edit) = update.can_edit {
        permission.can_edit = can_edit;
    }
    if let Some(can_delete) = update.can_delete {
        permission.can_delete = can_delete;
    }
    db.update_permission(&permission)?;
    Ok(permission)
}

/// Remove a permission row, i.e. revoke the delegation entirely.
pub fn remove_editor_permission<D: Db>(db: &D, actor_id: &Id, permission_id: &Id) -> Result<()> {
    let _actor = authorize_user_by_id(db, actor_id)?;
    db.delete_permission(permission_id)
        .map_err(|err| super::map_not_found(err, Error::PermissionNotFound))
}
