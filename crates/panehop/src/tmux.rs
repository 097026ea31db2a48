//! tmux subprocess plumbing.
//!
//! All tmux interaction goes through `run_tmux`, which resolves the
//! command from config (so users can point at a wrapper or a socket via
//! `[tmux] command`/`args`) and captures output for error reporting.

use std::process::{Command, Output};

use crate::config::TmuxConfig;

const DEFAULT_TMUX_COMMAND: &str = "tmux";

pub fn run_tmux(config: &TmuxConfig, args: &[&str]) -> Result<Output, String> {
    Command::new(resolve_command(config))
        .args(&config.args)
        .args(args)
        .output()
        .map_err(|err| err.to_string())
}

/// Run a tmux command and return its trimmed stdout, failing on a nonzero
/// exit status.
pub fn run_tmux_expect(config: &TmuxConfig, args: &[&str]) -> Result<String, String> {
    let output = run_tmux(config, args)?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    } else {
        Err(format!(
            "tmux {} failed.{}",
            args.first().copied().unwrap_or(""),
            format_output(&output)
        ))
    }
}

fn resolve_command(config: &TmuxConfig) -> String {
    config
        .command
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_TMUX_COMMAND)
        .to_string()
}

fn format_output(output: &Output) -> String {
    let parts: Vec<String> = [&output.stdout, &output.stderr]
        .into_iter()
        .map(|stream| String::from_utf8_lossy(stream).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join("\n"))
    }
}
