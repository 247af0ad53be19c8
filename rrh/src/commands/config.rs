//! `rrh config`: show the effective configuration.

use anyhow::Result;
use rrh_common::LoadedConfig;
use rrh_common::config::default_config_path;
use std::fmt::Write as _;

pub fn render(loaded: &LoadedConfig) -> String {
    let mut out = String::new();
    let file = match (&loaded.path, default_config_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(default)) => format!("none ({} not found)", default.display()),
        (None, None) => "none".to_string(),
    };
    let config = &loaded.config;
    let _ = writeln!(out, "Config file:   {}", file);
    let _ = writeln!(out, "log_level:     {}", config.log_level);
    let _ = writeln!(out, "log_format:    {}", config.log_format);
    let _ = writeln!(out, "output.format: {}", config.output_format);
    for err in &loaded.env_errors {
        let _ = writeln!(out, "ignored:       {}", err);
    }
    out
}

pub fn run(loaded: &LoadedConfig) -> Result<()> {
    print!("{}", render(loaded));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrh_common::config::{EnvError, Sourced};
    use rrh_common::{LogFormat, OutputFormat, RrhConfig};
    use std::path::PathBuf;

    #[test]
    fn test_render_shows_sources() {
        let loaded = LoadedConfig {
            config: RrhConfig {
                log_level: Sourced::from_env("debug".to_string(), "RRH_LOG_LEVEL"),
                log_format: Sourced::default_value(LogFormat::Text),
                output_format: Sourced::from_file(OutputFormat::Json),
            },
            path: Some(PathBuf::from("/etc/rrh/config.toml")),
            env_errors: vec![EnvError::InvalidValue {
                var: "RRH_OUTPUT_FORMAT".to_string(),
                expected: "text or json".to_string(),
                value: "yaml".to_string(),
            }],
        };

        let text = render(&loaded);
        assert!(text.contains("Config file:   /etc/rrh/config.toml"));
        assert!(text.contains("log_level:     debug (environment: RRH_LOG_LEVEL)"));
        assert!(text.contains("log_format:    text (default)"));
        assert!(text.contains("output.format: json (file)"));
        assert!(text.contains("ignored:       Invalid value for RRH_OUTPUT_FORMAT"));
    }
}
