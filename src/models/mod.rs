pub mod config;
pub mod settings;

pub use config::AppConfig;
pub use settings::SettingsRecord;
