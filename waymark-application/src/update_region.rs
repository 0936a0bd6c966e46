use super::*;

pub fn update_region(
    connections: &mem::Connections,
    actor_id: &Id,
    region_id: &Id,
    update: usecases::RegionUpdate,
) -> Result<Region> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_region(conn, actor_id, region_id, update))?)
}

pub fn change_region_status(
    connections: &mem::Connections,
    actor_id: &Id,
    region_id: &Id,
    status: RegionStatus,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::change_region_status(conn, actor_id, region_id, status))?)
}
