//! Rule-file parsing (YAML/JSON).

use crate::config::error::ConfigError;
use crate::types::rule::MockRule;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Rule file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileType {
    Yaml,
    Json,
    Unknown,
}

/// On-disk document shape: a list of mock rules under a `routes` key.
#[derive(Debug, Deserialize)]
pub struct RuleFile {
    /// Mock rules in declaration order
    pub routes: Vec<MockRule>,
}

/// Get rule file type from path extension
pub fn get_file_type(path: &str) -> RuleFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => RuleFileType::Yaml,
        "json" => RuleFileType::Json,
        _ => RuleFileType::Unknown,
    }
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse rule content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        RuleFileType::Yaml => parse_yaml(content),
        RuleFileType::Json => parse_json(content),
        RuleFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Load mock rules from a JSON or YAML file.
///
/// Rules keep the declaration order of the file; callers hand the list to
/// `install_mocks` unchanged.
pub async fn load_rules(path: impl AsRef<Path>) -> Result<Vec<MockRule>, ConfigError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().into_owned();
    let content = tokio::fs::read_to_string(path).await?;
    let file: RuleFile = parse_config(&content, &path_str)?;
    debug!(path = %path_str, count = file.routes.len(), "loaded mock rules");
    Ok(file.routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rule::Body;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;

    const JSON_RULES: &str = r#"{
        "routes": [
            {"url": "**/api/products", "method": "GET", "body": {"products": []}},
            {"url": "**/api/cart", "method": "POST", "body": {"success": true}, "status": 201}
        ]
    }"#;

    const YAML_RULES: &str = "routes:\n  - url: '**/api/products'\n    method: GET\n    body:\n      products: []\n";

    #[rstest]
    #[case("rules.yaml", RuleFileType::Yaml)]
    #[case("rules.YAML", RuleFileType::Yaml)]
    #[case("rules.yml", RuleFileType::Yaml)]
    #[case("rules.json", RuleFileType::Json)]
    #[case("rules.JSON", RuleFileType::Json)]
    #[case("rules.txt", RuleFileType::Unknown)]
    #[case("rules", RuleFileType::Unknown)]
    #[case("", RuleFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: RuleFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    fn test_parse_json_rule_file() {
        let file: RuleFile = parse_json(JSON_RULES).expect("Should parse");
        assert_eq!(file.routes.len(), 2);
        assert_eq!(file.routes[0].url_pattern, "**/api/products");
        assert_eq!(file.routes[0].method, "GET");
        assert_eq!(file.routes[1].status, Some(201));
    }

    #[rstest]
    fn test_parse_yaml_rule_file() {
        let file: RuleFile = parse_yaml(YAML_RULES).expect("Should parse");
        assert_eq!(file.routes.len(), 1);
        assert_eq!(file.routes[0].body, Body::Json(json!({"products": []})));
    }

    #[rstest]
    fn test_parse_json_invalid() {
        let result: Result<RuleFile, _> = parse_json("not json");
        assert!(matches!(result.unwrap_err(), ConfigError::Json(_)));
    }

    #[rstest]
    fn test_parse_config_dispatches_on_extension() {
        let from_json: RuleFile = parse_config(JSON_RULES, "rules.json").expect("Should parse");
        let from_yaml: RuleFile = parse_config(YAML_RULES, "rules.yml").expect("Should parse");
        assert_eq!(from_json.routes.len(), 2);
        assert_eq!(from_yaml.routes.len(), 1);
    }

    #[rstest]
    #[case("rules.txt")]
    #[case("rules.toml")]
    fn test_parse_config_unknown_file_type(#[case] path: &str) {
        let result: Result<RuleFile, _> = parse_config(JSON_RULES, path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_rules_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("Should create temp file");
        file.write_all(JSON_RULES.as_bytes())
            .expect("Should write rules");

        let rules = load_rules(file.path()).await.expect("Should load");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].url_pattern, "**/api/cart");
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_rules_missing_file() {
        let result = load_rules("/nonexistent/rules.json").await;
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
