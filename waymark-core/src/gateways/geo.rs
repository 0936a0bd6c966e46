use thiserror::Error;

use waymark_entities::geo::{Distance, MapPoint};

#[derive(Debug, Error)]
#[error("Location validation unavailable: {0}")]
pub struct GeoValidationError(pub String);

/// Decides whether a submitted user location is close enough to a place.
///
/// `Ok(false)` means the location is simply too far away, while `Err`
/// signals that the validation service itself failed. Callers must
/// treat the two outcomes as distinct errors.
pub trait GeoValidationGateway {
    fn validate_user_location(
        &self,
        user_location: MapPoint,
        place_location: MapPoint,
        max_distance: Distance,
    ) -> Result<bool, GeoValidationError>;
}

/// Validates locations locally via the great-circle distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreatCircleValidator;

impl GeoValidationGateway for GreatCircleValidator {
    fn validate_user_location(
        &self,
        user_location: MapPoint,
        place_location: MapPoint,
        max_distance: Distance,
    ) -> Result<bool, GeoValidationError> {
        if !max_distance.is_valid() {
            return Err(GeoValidationError(format!(
                "invalid maximum distance: {}",
                max_distance.to_meters()
            )));
        }
        let distance = MapPoint::distance(user_location, place_location);
        Ok(distance <= max_distance)
    }
}
