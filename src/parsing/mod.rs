pub mod config;
pub mod error;

pub use config::{
    dump_config_to_json, dump_config_to_toml, find_and_parse_config, parse_config,
    parse_config_str, ConfigFormat,
};
pub use error::ParsingError;
