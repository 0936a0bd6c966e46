use super::*;

pub fn moderate_checkin(
    connections: &mem::Connections,
    actor_id: &Id,
    checkin_id: &Id,
    status: usecases::ModerationStatus,
) -> Result<Checkin> {
    let moderated = connections
        .exclusive()
        .transaction(|conn| usecases::moderate_checkin(conn, actor_id, checkin_id, status))?;
    info!(
        "Moderated check-in {}: status is now {:?}",
        checkin_id, moderated.status
    );
    Ok(moderated)
}
