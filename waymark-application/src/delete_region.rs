use super::*;

pub fn delete_region(connections: &mem::Connections, actor_id: &Id, region_id: &Id) -> Result<()> {
    connections
        .exclusive()
        .transaction(|conn| usecases::delete_region(conn, actor_id, region_id))?;
    info!("Deleted region {}", region_id);
    Ok(())
}
