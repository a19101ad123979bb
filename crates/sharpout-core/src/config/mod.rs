//! Configuration system for sharpout
//!
//! - JSON, TOML and YAML configuration files
//! - Auto-discovery by traversing up directories
//! - Configuration inheritance through the `extends` field
//! - JSON Schema generation via schemars
//!
//! ## Configuration Discovery
//!
//! When no explicit config path is provided, the loader searches for
//! `.sharpoutrc.json`, `.sharpoutrc.toml`, `sharpout.yaml`, `sharpout.yml`
//! and `sharpout.json`, starting from the current directory and moving up
//! the directory tree.
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   "$schema": "./sharpout.schema.json",
//!   "extends": ["../shared/sharpout.json"],
//!   "formatter": {
//!     "preset": "mono",
//!     "indentStyle": "spaces",
//!     "indentSize": 4,
//!     "braces": { "statement": "nextLine" },
//!     "spacing": { "beforeMethodCallParentheses": false },
//!     "blankLines": { "betweenMembers": 2 }
//!   }
//! }
//! ```

mod loader;
mod merge;
mod resolve;
mod sharpout_config;

pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use sharpout_config::{
    BlankLinesConfiguration, BracesConfiguration, FormatterConfiguration, SharpoutConfig,
    SpacingConfiguration, WrappingConfiguration,
};

/// JSON Schema describing configuration files
pub fn json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(SharpoutConfig);
    let mut value = serde_json::to_value(schema).unwrap_or_default();
    value["title"] = serde_json::json!("sharpout configuration");
    value["description"] =
        serde_json::json!("Configuration file schema for sharpout formatting policies");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_formatter_options() {
        let schema = json_schema();
        let text = serde_json::to_string(&schema).unwrap();
        assert!(text.contains("formatter"));
        assert!(text.contains("indentSwitchBody"));
        assert!(text.contains("nextLineIndented2"));
        assert_eq!(schema["title"], "sharpout configuration");
    }
}
