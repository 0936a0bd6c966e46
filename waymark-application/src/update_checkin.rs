use super::*;

pub fn update_checkin(
    connections: &mem::Connections,
    actor_id: &Id,
    checkin_id: &Id,
    update: usecases::CheckinUpdate,
) -> Result<Checkin> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_checkin(conn, actor_id, checkin_id, update))?)
}

pub fn update_photo_caption(
    connections: &mem::Connections,
    actor_id: &Id,
    photo_id: &Id,
    caption: Option<&str>,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_photo_caption(conn, actor_id, photo_id, caption))?)
}
