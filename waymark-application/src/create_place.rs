use super::*;

pub fn create_place(
    connections: &mem::Connections,
    actor_id: &Id,
    new_place: usecases::NewPlace,
) -> Result<Place> {
    let place = connections
        .exclusive()
        .transaction(|conn| usecases::create_place(conn, actor_id, new_place))?;
    info!("Created place {} in region {}", place.id, place.region_id);
    Ok(place)
}
