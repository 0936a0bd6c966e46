use super::*;

/// Read a place and count the visit. The counter is best-effort and
/// deliberately kept outside of any transaction; a failure must never
/// fail the read itself.
pub fn visit_place(connections: &mem::Connections, place_id: &Id) -> Result<Place> {
    let place = usecases::get_place(&*connections.shared(), place_id)?;
    if let Err(err) = connections.exclusive().increment_place_visit_count(place_id) {
        warn!("Failed to count visit of place {}: {}", place_id, err);
    }
    Ok(place)
}
