pub mod types;
pub mod loader;
pub mod builder;
pub mod templates;

pub use types::{
    ClassificationSettings, ClientSettings, MessageCatalog, MessageOverrides, OutcomeConfig,
    DEFAULT_TIMEOUT_SECONDS,
};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::OutcomeConfigBuilder;
pub use templates::{generate_default_config_template, ensure_config_file_exists};
