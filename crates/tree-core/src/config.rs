//! Scene configuration.
//!
//! Defaults come from [`crate::constants`]; the web front end may override a
//! handful of them from the page's query string, e.g.
//! `?foliage=8000&snow=0&smoothing=time&seed=7`.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::generator::TreeShape;
use crate::transition::Smoothing;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub foliage_count: usize,
    pub ornament_count: usize,
    pub snow_count: usize,
    pub star_count: usize,
    pub photo_slots: usize,
    pub firework_particles: usize,
    pub tree: TreeShape,
    pub scatter_radius: f32,
    pub foliage_smoothing: f32,
    pub ornament_smoothing: f32,
    pub photo_smoothing: f32,
    pub smoothing: Smoothing,
    /// Fixed RNG seed; `None` draws a fresh one every session.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            foliage_count: FOLIAGE_COUNT,
            ornament_count: ORNAMENT_COUNT,
            snow_count: SNOW_COUNT,
            star_count: STAR_COUNT,
            photo_slots: PHOTO_SLOT_COUNT,
            firework_particles: FIREWORK_PARTICLES,
            tree: TreeShape::default(),
            scatter_radius: SCATTER_RADIUS,
            foliage_smoothing: FOLIAGE_SMOOTHING,
            ornament_smoothing: ORNAMENT_SMOOTHING,
            photo_smoothing: PHOTO_SMOOTHING,
            smoothing: Smoothing::PerFrame,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Defaults with query-string overrides applied, then validated.
    pub fn from_query(query: &str) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_query(query)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `key=value` pairs from a URL query (leading `?` optional).
    ///
    /// Unknown keys are logged and skipped; malformed values are an error.
    pub fn apply_query(&mut self, query: &str) -> Result<()> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "foliage" => self.foliage_count = parse_value(key, value)?,
                "ornaments" => self.ornament_count = parse_value(key, value)?,
                "snow" => self.snow_count = parse_value(key, value)?,
                "stars" => self.star_count = parse_value(key, value)?,
                "seed" => self.seed = Some(parse_value(key, value)?),
                "smoothing" => {
                    self.smoothing = match value {
                        "frame" => Smoothing::PerFrame,
                        "time" => Smoothing::FrameRateIndependent,
                        _ => return Err(invalid(key, value)),
                    }
                }
                _ => log::warn!("[config] ignoring unknown query parameter `{}`", key),
            }
        }
        Ok(())
    }

    /// Snow and stars may be switched off entirely; the tree itself may not.
    pub fn validate(&self) -> Result<()> {
        if self.foliage_count == 0 {
            return Err(Error::EmptyGroup("foliage"));
        }
        if self.photo_slots == 0 {
            return Err(Error::EmptyGroup("photo slot"));
        }
        if self.firework_particles == 0 {
            return Err(Error::EmptyGroup("firework particle"));
        }
        if self.ornament_count > ORNAMENT_MAX {
            return Err(Error::TooManyOrnaments {
                count: self.ornament_count,
                max: ORNAMENT_MAX,
            });
        }
        for (name, value) in [
            ("foliage_smoothing", self.foliage_smoothing),
            ("ornament_smoothing", self.ornament_smoothing),
            ("photo_smoothing", self.photo_smoothing),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(Error::SmoothingOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidQuery {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn query_overrides_counts_and_smoothing() {
        let cfg = SceneConfig::from_query("?foliage=800&snow=0&smoothing=time&seed=42").unwrap();
        assert_eq!(cfg.foliage_count, 800);
        assert_eq!(cfg.snow_count, 0);
        assert_eq!(cfg.smoothing, Smoothing::FrameRateIndependent);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = SceneConfig::from_query("theme=dark&stars=10").unwrap();
        assert_eq!(cfg.star_count, 10);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            SceneConfig::from_query("foliage=lots"),
            Err(Error::InvalidQuery {
                key: "foliage".into(),
                value: "lots".into()
            })
        );
        assert!(SceneConfig::from_query("smoothing=sometimes").is_err());
    }

    #[test]
    fn validation_catches_empty_tree_and_bad_smoothing() {
        assert_eq!(
            SceneConfig::from_query("foliage=0"),
            Err(Error::EmptyGroup("foliage"))
        );
        let cfg = SceneConfig {
            photo_smoothing: 1.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(Error::SmoothingOutOfRange { name: "photo_smoothing", .. })
        ));
        assert!(SceneConfig::from_query("ornaments=401").is_err());
    }
}
