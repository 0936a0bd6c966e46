use super::*;

pub fn create_region(
    connections: &mem::Connections,
    actor_id: &Id,
    new_region: usecases::NewRegion,
) -> Result<Region> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::create_region(conn, actor_id, new_region))?)
}
