use anyhow::{Context, Result};
use payoff_core::{PayoffMethod, SimulationConfig, MAX_PAYOFF_MONTHS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_payoff_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanSection,
    #[serde(default)]
    pub simulation: SimulationSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSection {
    /// Debt file used when --debts is not given (default: ~/.payoff/plan.json)
    pub debts_file: Option<String>,
    /// Extra monthly payment when neither --extra nor the plan file sets one
    pub extra_payment: f64,
    /// Method shown by `schedule` and `timeline`
    pub method: PayoffMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub max_months: u32,
}

impl Default for PlanSection {
    fn default() -> Self {
        Self {
            debts_file: None,
            extra_payment: 0.0,
            method: PayoffMethod::Avalanche,
        }
    }
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            max_months: MAX_PAYOFF_MONTHS,
        }
    }
}

impl Config {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig::default().with_max_months(self.simulation.max_months)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_payoff_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
