use super::*;

pub fn accept_editor_invite(
    connections: &mem::Connections,
    actor_id: &Id,
    permission_id: &Id,
) -> Result<PlacePermission> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::accept_editor_invite(conn, actor_id, permission_id))?)
}

pub fn update_editor_permission(
    connections: &mem::Connections,
    actor_id: &Id,
    permission_id: &Id,
    update: usecases::PermissionUpdate,
) -> Result<PlacePermission> {
    Ok(connections.exclusive().transaction(|conn| {
        usecases::update_editor_permission(conn, actor_id, permission_id, update)
    })?)
}

pub fn remove_editor_permission(
    connections: &mem::Connections,
    actor_id: &Id,
    permission_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::remove_editor_permission(conn, actor_id, permission_id))?)
}
