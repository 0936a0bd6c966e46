use serde::Deserialize;

use waymark_core::usecases::CheckinPolicy;
use waymark_entities::geo::Distance;

const DEFAULT_CONFIG_FILE: &str = include_str!("waymark.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub checkins: Option<Checkins>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

impl Config {
    pub fn from_toml_str(toml: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn checkin_policy(&self) -> CheckinPolicy {
        self.checkins
            .as_ref()
            .map(Checkins::policy)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Checkins {
    pub max_distance_meters: f64,
    pub max_photos: usize,
}

impl Default for Checkins {
    fn default() -> Self {
        Config::default().checkins.expect("Check-in configuration")
    }
}

impl Checkins {
    fn policy(&self) -> CheckinPolicy {
        CheckinPolicy {
            max_distance: Distance::from_meters(self.max_distance_meters),
            max_photos: self.max_photos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_embedded() {
        let cfg = Config::default();
        let policy = cfg.checkin_policy();
        assert_eq!(500.0, policy.max_distance.to_meters());
        assert_eq!(10, policy.max_photos);
    }

    #[test]
    fn kebab_case_keys() {
        let cfg = Config::from_toml_str(
            r#"
            [checkins]
            max-distance-meters = 250.0
            max-photos = 3
            "#,
        )
        .unwrap();
        let policy = cfg.checkin_policy();
        assert_eq!(250.0, policy.max_distance.to_meters());
        assert_eq!(3, policy.max_photos);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        let policy = cfg.checkin_policy();
        assert_eq!(500.0, policy.max_distance.to_meters());
    }
}
