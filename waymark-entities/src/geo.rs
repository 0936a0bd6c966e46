use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical location on the map.
///
/// Constructed values always carry coordinates within the valid
/// degree ranges, i.e. lat in [-90, 90] and lng in [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat_deg: f64,
    lng_deg: f64,
}

impl Default for MapPoint {
    fn default() -> Self {
        Self {
            lat_deg: 0.0,
            lng_deg: 0.0,
        }
    }
}

impl MapPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let res = Self::try_from_lat_lng_deg(lat, lng);
        debug_assert!(res.is_some());
        res.unwrap_or_default()
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let lat_deg = lat.into();
        let lng_deg = lng.into();
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat_deg)
            || !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng_deg)
        {
            return None;
        }
        Some(Self { lat_deg, lng_deg })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat_deg
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng_deg
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat_deg.to_radians(), self.lng_deg.to_radians())
    }
}

#[derive(Debug, Error)]
#[error("Failed to parse map point: {0}")]
pub struct MapPointParseError(String);

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError(s.to_string()));
        };
        let lat: f64 = lat_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError(s.to_string()))?;
        let lng: f64 = lng_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError(s.to_string()))?;
        Self::try_from_lat_lng_deg(lat, lng).ok_or_else(|| MapPointParseError(s.to_string()))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat_deg, self.lng_deg)
    }
}

/// A non-negative distance between two map points.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface of the earth
    /// using a special case of the Vincenty formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn latitude_bounds() {
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 0.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 0.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.000001, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(90.000001, 0.0).is_none());
    }

    #[test]
    fn longitude_bounds() {
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.000001).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.000001).is_none());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);

        let p2 = MapPoint::from_lat_lng_deg(-25.0, 55.0);
        assert_eq!(MapPoint::distance(p2, p2).to_meters(), 0.0);

        let p1 = MapPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lng_deg(49.4836, 8.4630);
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_meters(94_000.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_meters(95_000.0));

        let new_york = MapPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lng_deg(-33.867138, 151.207108);
        assert!(MapPoint::distance(new_york, sidney) > Distance::from_meters(15_985_000.0));
        assert!(MapPoint::distance(new_york, sidney) < Distance::from_meters(15_995_000.0));
    }

    #[test]
    fn symmetric_distance() {
        let a = MapPoint::from_lat_lng_deg(80.0, 0.0);
        let b = MapPoint::from_lat_lng_deg(90.0, 20.0);
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));
    }

    #[test]
    fn positive_distance_regressions() {
        let p1 = MapPoint::from_lat_lng_deg(-81.2281041784343, 77.75747775927069);
        let p2 = MapPoint::from_lat_lng_deg(40.92116510538438, -93.33303223984923);
        assert!(MapPoint::distance(p1, p2).to_meters() >= 0.0);

        let p1 = MapPoint::from_lat_lng_deg(67.01568147028595, 122.10276824520099);
        let p2 = MapPoint::from_lat_lng_deg(-87.84709362678561, 132.71691422570353);
        assert!(MapPoint::distance(p1, p2).to_meters() >= 0.0);
    }

    #[test]
    fn parse_map_point() {
        let p: MapPoint = "35.6762, 139.6503".parse().unwrap();
        assert_eq!(p, MapPoint::from_lat_lng_deg(35.6762, 139.6503));
        assert!("35.6762".parse::<MapPoint>().is_err());
        assert!("91.0,0.0".parse::<MapPoint>().is_err());
        assert!("foo,bar".parse::<MapPoint>().is_err());
    }
}
