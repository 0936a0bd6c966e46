use super::*;

/// Of two racing deletes of the same place exactly one wins; the
/// loser surfaces `PlaceNotFound` from inside its transaction.
pub fn delete_place(connections: &mem::Connections, actor_id: &Id, place_id: &Id) -> Result<()> {
    connections
        .exclusive()
        .transaction(|conn| usecases::delete_place(conn, actor_id, place_id))?;
    info!("Deleted place {}", place_id);
    Ok(())
}
