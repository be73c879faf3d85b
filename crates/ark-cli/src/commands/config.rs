//! Print the effective configuration
//!
//! Shows the values containers are actually built with, after defaults,
//! global config, project config, environment and CLI flags are applied.

use anyhow::Result;
use ark_collections::Tuning;
use ark_config::Config;
use std::io::{self, Write};

pub fn run(config: &Config, tuning: Tuning, log_level: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_settings(&mut out, config, tuning, log_level)?;
    out.flush()?;
    Ok(())
}

pub fn write_settings<W: Write>(
    out: &mut W,
    config: &Config,
    tuning: Tuning,
    log_level: &str,
) -> io::Result<()> {
    match config.project_root() {
        Some(root) => writeln!(out, "# project: {}", root.display())?,
        None => writeln!(out, "# project: none (no ark.toml found)")?,
    }
    writeln!(out, "[collections]")?;
    writeln!(out, "initial_capacity = {}", tuning.initial_capacity())?;
    writeln!(out, "max_load_factor = {}", tuning.max_load_factor())?;
    writeln!(out)?;
    writeln!(out, "[logging]")?;
    writeln!(out, "level = \"{}\"", log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_project() {
        let mut buf = Vec::new();
        write_settings(&mut buf, &Config::default(), Tuning::default(), "warn").unwrap();
        insta::assert_snapshot!(String::from_utf8(buf).unwrap(), @r#"
        # project: none (no ark.toml found)
        [collections]
        initial_capacity = 16
        max_load_factor = 0.75

        [logging]
        level = "warn"
        "#);
    }
}
