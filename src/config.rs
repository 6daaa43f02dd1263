use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct RatingConfig {
    pub star_count: u8,
    pub star_width: f32,
    pub star_height: f32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            star_count: 5,
            star_width: 44.0,
            star_height: 44.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Private document storage; the archive file lives here.
    pub documents_dir: PathBuf,
    pub rating: RatingConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = RatingConfig::default();
        let rating = RatingConfig {
            star_count: parse_var("STAR_COUNT")?.unwrap_or(defaults.star_count),
            star_width: parse_var("STAR_WIDTH")?.unwrap_or(defaults.star_width),
            star_height: parse_var("STAR_HEIGHT")?.unwrap_or(defaults.star_height),
        };
        Ok(Self {
            documents_dir: std::env::var("DOCUMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            rating,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("APP_PORT")?.unwrap_or(8080),
        })
    }
}

fn parse_var<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("invalid value for {}: {:?}", key, v)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_defaults_match_the_stock_control() {
        let cfg = RatingConfig::default();
        assert_eq!(cfg.star_count, 5);
        assert_eq!(cfg.star_width, 44.0);
        assert_eq!(cfg.star_height, 44.0);
    }

    #[test]
    fn parse_var_reports_bad_numbers() {
        std::env::set_var("FOODTRACKER_TEST_BAD_NUMBER", "five");
        let err = parse_var::<u8>("FOODTRACKER_TEST_BAD_NUMBER").unwrap_err();
        assert!(err.to_string().contains("FOODTRACKER_TEST_BAD_NUMBER"));

        std::env::set_var("FOODTRACKER_TEST_GOOD_NUMBER", " 7 ");
        assert_eq!(parse_var::<u8>("FOODTRACKER_TEST_GOOD_NUMBER").unwrap(), Some(7));

        assert_eq!(parse_var::<u8>("FOODTRACKER_TEST_UNSET_NUMBER").unwrap(), None);
    }
}
