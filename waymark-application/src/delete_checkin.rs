use super::*;

pub fn delete_checkin(connections: &mem::Connections, actor_id: &Id, checkin_id: &Id) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::delete_checkin(conn, actor_id, checkin_id))?)
}

pub fn hard_delete_checkin(
    connections: &mem::Connections,
    actor_id: &Id,
    checkin_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::hard_delete_checkin(conn, actor_id, checkin_id))?)
}
