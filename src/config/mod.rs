// Core configuration types
mod core;
mod loader;

pub use self::core::{
    FileConfig, FilterOptions, OutputMode, OutputSection, StatsFormat, StatsSection,
};
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
