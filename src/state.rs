use crate::archive::{FileArchive, MealArchive};
use crate::config::AppConfig;
use crate::form::model::NameForm;
use crate::rating::control::RatingControl;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub archive: Arc<dyn MealArchive>,
    pub rating: Arc<Mutex<RatingControl>>,
    pub form: Arc<Mutex<NameForm>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let archive = Arc::new(FileArchive::new(&config.documents_dir)) as Arc<dyn MealArchive>;
        Self::from_parts(Arc::new(config), archive)
    }

    pub fn from_parts(config: Arc<AppConfig>, archive: Arc<dyn MealArchive>) -> anyhow::Result<Self> {
        let rating = RatingControl::from_config(&config.rating).context("rating control config")?;
        Ok(Self {
            config,
            archive,
            rating: Arc::new(Mutex::new(rating)),
            form: Arc::new(Mutex::new(NameForm::default())),
        })
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::archive::InMemoryArchive;
        use crate::config::RatingConfig;

        let config = Arc::new(AppConfig {
            documents_dir: "fake".into(),
            rating: RatingConfig::default(),
            host: "127.0.0.1".into(),
            port: 0,
        });
        let archive = Arc::new(InMemoryArchive::default()) as Arc<dyn MealArchive>;
        Self::from_parts(config, archive).expect("default rating config is valid")
    }
}
