//! TOML parser with helpful error messages

use std::path::Path;

use super::schema::ProjectConfig;
use crate::error::{Error, Result};

/// Parse hearth.toml with detailed error messages
pub fn parse_hearth_toml(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    parse_hearth_toml_str(&content).map_err(|message| Error::ConfigInvalid {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse hearth.toml content from string
pub fn parse_hearth_toml_str(content: &str) -> std::result::Result<ProjectConfig, String> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(&e, content))?;

    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with the offending lines
fn enhance_toml_error(error: &toml::de::Error, content: &str) -> String {
    let message = error.message().trim_end();
    match error.span() {
        Some(span) => {
            let line_num = content[..span.start.min(content.len())]
                .matches('\n')
                .count()
                + 1;
            format!(
                "TOML parsing error at line {}:\n{}\n\nError: {}",
                line_num,
                get_line_context(content, line_num),
                message
            )
        }
        None => format!("TOML parsing error: {}", message),
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 2).min(lines.len());
    if start >= end {
        return String::new();
    }

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
