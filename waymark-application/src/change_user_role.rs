use super::*;

pub fn change_user_role(
    connections: &mem::Connections,
    actor_id: &Id,
    user_id: &Id,
    role: Role,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::change_user_role(conn, actor_id, user_id, role))?)
}

pub fn change_user_status(
    connections: &mem::Connections,
    actor_id: &Id,
    user_id: &Id,
    status: UserStatus,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::change_user_status(conn, actor_id, user_id, status))?)
}
