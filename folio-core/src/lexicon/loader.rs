//! Lexicon resource loader
//!
//! Embedded lexicons are parsed once on first access and cached for the
//! life of the process.

use super::config::LexiconConfig;
use crate::error::LexiconError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Parsed embedded lexicons, keyed by code and by name
static EMBEDDED: OnceLock<HashMap<String, LexiconConfig>> = OnceLock::new();

/// Codes of the lexicons compiled into the binary
pub const EMBEDDED_CODES: &[&str] = &["en"];

/// Look up an embedded lexicon by code (`en`) or name (`english`)
pub fn embedded(code: &str) -> Result<&'static LexiconConfig, LexiconError> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match parse("en", include_str!("../../configs/lexicon/english.toml")) {
            Ok(config) => {
                map.insert("english".to_string(), config.clone());
                map.insert("en".to_string(), config);
            }
            Err(e) => {
                log::error!("failed to load embedded English lexicon: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .ok_or_else(|| LexiconError::Unavailable(format!("no embedded lexicon for '{code}'")))
}

/// Read and parse a lexicon file
pub fn load_file(path: &Path) -> Result<LexiconConfig, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LexiconError::Unavailable(format!("cannot read {}: {e}", path.display()))
    })?;
    parse(&path.display().to_string(), &content)
}

/// Parse lexicon TOML
pub fn parse(name: &str, toml_str: &str) -> Result<LexiconConfig, LexiconError> {
    toml::from_str(toml_str).map_err(|e| LexiconError::Invalid {
        name: name.to_string(),
        message: e.to_string(),
    })
}
