//! Numeric cell parsing for hand-edited spreadsheets.
//!
//! Accepted:
//!   money:   1234.56   $1,234.56   -$20   $ 15
//!   percent: 19.99     19.99%      0
//!
//! Negative values pass through; range checks belong to the core validator.

use anyhow::{anyhow, Result};
use regex::Regex;

pub struct CellParser {
    money_re: Regex,
    percent_re: Regex,
}

impl CellParser {
    pub fn new() -> Result<Self> {
        let money_re = Regex::new(concat!(
            r"^(?P<neg>-)?\s*\$?\s*",
            r"(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)$"
        ))?;
        let percent_re = Regex::new(r"^(?P<num>-?(?:\d+(?:\.\d+)?|\.\d+))\s*%?$")?;
        Ok(Self {
            money_re,
            percent_re,
        })
    }

    pub fn money(&self, raw: &str) -> Result<f64> {
        let s = raw.trim();
        let caps = self
            .money_re
            .captures(s)
            .ok_or_else(|| anyhow!("not a money amount: '{raw}'"))?;
        let value: f64 = caps["num"].replace(',', "").parse()?;
        Ok(if caps.name("neg").is_some() { -value } else { value })
    }

    pub fn percent(&self, raw: &str) -> Result<f64> {
        let s = raw.trim();
        let caps = self
            .percent_re
            .captures(s)
            .ok_or_else(|| anyhow!("not a percentage: '{raw}'"))?;
        Ok(caps["num"].parse()?)
    }
}
