mod loader;
mod model;
mod options;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::Config;
pub use options::GenerateOptions;
