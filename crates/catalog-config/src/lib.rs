pub mod paths;
pub mod preferences;

pub use paths::{config_base_path, PathManager};
pub use preferences::{Preferences, PreferencesError, SortPrefs};
