use crate::config::{parse_day, parse_parts, RunConfig, DEFAULT_INPUT_PATH};
use crate::domain::model::{MalformedPolicy, OutputFormat, Part};
use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub errors: ErrorHandlingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub day: Option<u8>,
    pub parts: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_malformed: Option<MalformedPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PuzzleError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read config file '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PuzzleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PUZZLE_INPUT_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PuzzleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(day) = self.run.day {
            validate_range("run.day", day, 1, 2)?;
        }

        if let Some(parts) = &self.run.parts {
            for &part in parts {
                validate_range("run.parts", part, 1, 2)?;
            }
        }

        if let Some(path) = &self.input.path {
            validate_path("input.path", path)?;
        }

        Ok(())
    }

    pub fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    /// Builds the run settings; the day has no default and must be present.
    pub fn run_config(&self) -> Result<RunConfig> {
        self.validate_config()?;

        let day = parse_day(*validate_required_field("run.day", &self.run.day)?)?;
        let parts = match &self.run.parts {
            Some(parts) => parse_parts(parts)?,
            None => Part::ALL.to_vec(),
        };

        let config = RunConfig {
            day,
            parts,
            input_path: self.input_path().to_string(),
            on_malformed: self.errors.on_malformed.unwrap_or_default(),
            format: self.output.format.unwrap_or_default(),
            verbose: self.logging.verbose.unwrap_or(false),
            json_logs: self.logging.json.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Day;
    use crate::utils::error::{ErrorCategory, ErrorSeverity};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[run]
day = 2
parts = [2]

[input]
path = "day02.txt"

[errors]
on_malformed = "skip"

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let run = config.run_config().unwrap();

        assert_eq!(run.day, Day::CubeGame);
        assert_eq!(run.parts, vec![Part::Two]);
        assert_eq!(run.input_path, "day02.txt");
        assert_eq!(run.on_malformed, MalformedPolicy::Skip);
        assert_eq!(run.format, OutputFormat::Json);
        assert!(run.verbose);
        assert!(!run.json_logs);
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = TomlConfig::from_toml_str("[run]\nday = 1\n").unwrap();
        let run = config.run_config().unwrap();

        assert_eq!(run.parts, vec![Part::One, Part::Two]);
        assert_eq!(run.input_path, DEFAULT_INPUT_PATH);
        assert_eq!(run.on_malformed, MalformedPolicy::Abort);
        assert_eq!(run.format, OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PUZZLE_ETL_TEST_DIR", "/tmp/puzzles");

        let toml_content = r#"
[run]
day = 1

[input]
path = "${PUZZLE_ETL_TEST_DIR}/day01.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/tmp/puzzles/day01.txt");

        std::env::remove_var("PUZZLE_ETL_TEST_DIR");
    }

    #[test]
    fn test_unknown_env_var_left_as_written() {
        let toml_content = r#"
[input]
path = "${PUZZLE_ETL_SURELY_UNDEFINED}/input.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.input_path(),
            "${PUZZLE_ETL_SURELY_UNDEFINED}/input.txt"
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[run]\nday = 3\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[run]\nday = 1\nparts = [0]\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[input]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_day_is_reported() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        assert!(matches!(
            config.run_config(),
            Err(PuzzleError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[run\nday = 1");
        assert!(matches!(
            result,
            Err(PuzzleError::ConfigValidationError { .. })
        ));

        let result = TomlConfig::from_toml_str("[errors]\non_malformed = \"ignore\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("puzzle.toml");

        let err = TomlConfig::from_file(&missing).unwrap_err();
        match &err {
            PuzzleError::ConfigValidationError { field, message } => {
                assert_eq!(field, "config");
                assert!(message.contains("puzzle.toml"));
            }
            other => panic!("expected ConfigValidationError, got {:?}", other),
        }
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("'config'"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[run]\nday = 2\n\n[input]\npath = \"games.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.run.day, Some(2));
        assert_eq!(config.input_path(), "games.txt");
    }
}
