use super::*;

use waymark_core::gateways::geo::GeoValidationGateway;

pub fn create_checkin(
    connections: &mem::Connections,
    geo: &dyn GeoValidationGateway,
    actor_id: &Id,
    new_checkin: usecases::NewCheckin,
    policy: &usecases::CheckinPolicy,
) -> Result<Checkin> {
    // Advisory duplicate lookup. The result is only logged; repeated
    // check-ins at the same place are allowed.
    match connections
        .shared()
        .has_user_checked_in(actor_id, &new_checkin.place_id)
    {
        Ok(true) => info!(
            "User {} already checked in at place {}",
            actor_id, new_checkin.place_id
        ),
        Ok(false) => (),
        Err(err) => warn!(
            "Recent check-in lookup for place {} failed: {}",
            new_checkin.place_id, err
        ),
    }

    let (checkin, _photos) = connections.exclusive().transaction(|conn| {
        let storable = usecases::prepare_new_checkin(conn, geo, actor_id, new_checkin, policy)?;
        usecases::store_new_checkin(conn, storable)
    })?;
    Ok(checkin)
}
