use crate::CliResult;
use std::{env, path::PathBuf};
use tabsplit_domain::{DEFAULT_SETTLEMENT_TOLERANCE, Money};
use tabsplit_presentation::DEFAULT_DISPLAY_SCALE;

const STORE_VAR: &str = "TABSPLIT_STORE";
const TOLERANCE_VAR: &str = "TABSPLIT_TOLERANCE";
const DISPLAY_SCALE_VAR: &str = "TABSPLIT_DISPLAY_SCALE";
const REQUIRE_RECEIPT_VAR: &str = "TABSPLIT_REQUIRE_RECEIPT";

const DEFAULT_STORE: &str = "expenses.json";
const MAX_DISPLAY_SCALE: u32 = 28;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub store_path: PathBuf,
    pub tolerance: Money,
    pub display_scale: u32,
    pub require_receipt: bool,
}

impl CliConfig {
    /// Reads settings from the process environment after loading `.env` when present.
    pub fn from_env() -> CliResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let store_path = value(STORE_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_STORE), PathBuf::from);

        let tolerance = match value(TOLERANCE_VAR) {
            Some(raw) => raw
                .parse::<Money>()
                .ok()
                .filter(|tolerance| !tolerance.is_negative())
                .ok_or_else(|| {
                    format!("{TOLERANCE_VAR} must be a non-negative decimal (got '{raw}')")
                })?,
            None => DEFAULT_SETTLEMENT_TOLERANCE,
        };

        let display_scale = match value(DISPLAY_SCALE_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|scale| *scale <= MAX_DISPLAY_SCALE)
                .ok_or_else(|| {
                    format!(
                        "{DISPLAY_SCALE_VAR} must be between 0 and {MAX_DISPLAY_SCALE} (got '{raw}')"
                    )
                })?,
            None => DEFAULT_DISPLAY_SCALE,
        };

        let require_receipt = match value(REQUIRE_RECEIPT_VAR).as_deref() {
            None => false,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(raw) => {
                return Err(
                    format!("{REQUIRE_RECEIPT_VAR} must be true or false (got '{raw}')").into(),
                );
            }
        };

        Ok(Self {
            store_path,
            tolerance,
            display_scale,
            require_receipt,
        })
    }
}
