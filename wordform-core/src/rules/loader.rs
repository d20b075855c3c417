//! Rule table loader
//!
//! Embedded tables ship with the crate and load lazily exactly once behind a
//! `OnceLock`; external tables can be loaded from a directory for hosts that
//! maintain their own rule data. Missing or malformed data is fatal at load
//! time and never surfaces mid-conversion.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::rules::RuleSet;

const CASING_TABLE: &str = include_str!("../../configs/rules/casing.toml");
const ENTITY_TABLE: &str = include_str!("../../configs/rules/entities.toml");
const CONTRACTION_TABLE: &str = include_str!("../../configs/rules/contractions.toml");

static SHARED: OnceLock<std::result::Result<Arc<RuleSet>, CoreError>> = OnceLock::new();

/// The process-wide rule set, built from the embedded tables on first use.
///
/// Concurrent callers never duplicate the load or observe a partially-built
/// table; a load failure is cached and returned to every caller.
pub(crate) fn shared() -> Result<Arc<RuleSet>> {
    SHARED
        .get_or_init(|| load_embedded().map(Arc::new))
        .clone()
}

/// Build a rule set from the embedded tables.
pub(crate) fn load_embedded() -> Result<RuleSet> {
    debug!("loading embedded rule tables");
    RuleSet::from_sources(CASING_TABLE, ENTITY_TABLE, CONTRACTION_TABLE)
}

/// Build a rule set from `casing.toml`, `entities.toml`, and
/// `contractions.toml` in the given directory.
pub(crate) fn load_dir(dir: &Path) -> Result<RuleSet> {
    debug!(dir = %dir.display(), "loading rule tables from directory");
    let casing = read_table(dir, "casing.toml")?;
    let entities = read_table(dir, "entities.toml")?;
    let contractions = read_table(dir, "contractions.toml")?;
    RuleSet::from_sources(&casing, &entities, &contractions)
}

pub(crate) fn parse_table<T: DeserializeOwned>(table: &str, source: &str) -> Result<T> {
    toml::from_str(source).map_err(|err| CoreError::DataLoad {
        table: table.to_string(),
        reason: err.to_string(),
    })
}

fn read_table(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|err| CoreError::DataLoad {
        table: file.trim_end_matches(".toml").to_string(),
        reason: format!("{}: {err}", path.display()),
    })
}
