//! Rule-file loading (JSON/YAML).

pub mod error;
pub mod parser;

pub use error::ConfigError;
pub use parser::{load_rules, parse_config, RuleFile};
