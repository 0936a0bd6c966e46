use super::*;

pub fn update_place(
    connections: &mem::Connections,
    actor_id: &Id,
    place_id: &Id,
    update: usecases::PlaceUpdate,
) -> Result<Place> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_place(conn, actor_id, place_id, update))?)
}

pub fn change_place_status(
    connections: &mem::Connections,
    actor_id: &Id,
    place_id: &Id,
    status: PlaceStatus,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::change_place_status(conn, actor_id, place_id, status))?)
}
