use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn payoff_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".payoff"))
}

pub fn ensure_payoff_home() -> Result<PathBuf> {
    let dir = payoff_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn plan_path() -> Result<PathBuf> {
    Ok(ensure_payoff_home()?.join("plan.json"))
}
