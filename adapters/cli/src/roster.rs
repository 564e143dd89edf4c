//! Roster manifest describing the aircraft currently on frequency.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context, Result};

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Aircraft on frequency, keyed by lowercase callsign.
#[derive(Debug)]
pub(crate) struct Roster {
    aircraft: BTreeMap<String, String>,
}

impl Roster {
    /// Loads the roster manifest located at the provided path.
    pub(crate) fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let manifest_path = path.as_ref();
        let contents = fs::read_to_string(manifest_path).with_context(|| {
            format!(
                "failed to read roster manifest at {}",
                manifest_path.display()
            )
        })?;
        Self::from_manifest_str(&contents)
    }

    /// Parses a roster manifest from its TOML contents.
    pub(crate) fn from_manifest_str(contents: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(contents).context("failed to parse roster manifest toml contents")?;
        if manifest.version != SUPPORTED_MANIFEST_VERSION {
            bail!(
                "unsupported roster manifest version {}; expected {}",
                manifest.version,
                SUPPORTED_MANIFEST_VERSION
            );
        }

        let mut aircraft = BTreeMap::new();
        for (callsign, designator) in manifest.aircraft {
            let callsign = callsign.to_lowercase();
            if aircraft.insert(callsign.clone(), designator).is_some() {
                bail!("roster manifest contains duplicate entry for {callsign}");
            }
        }

        Ok(Self { aircraft })
    }

    /// Returns whether the callsign is listed on the roster.
    pub(crate) fn contains(&self, callsign: &str) -> bool {
        self.aircraft.contains_key(callsign)
    }

    /// Returns whether the roster lists no aircraft at all.
    pub(crate) fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Formats the check-in line: callsigns with their type designators, in
    /// callsign order.
    pub(crate) fn on_frequency(&self) -> String {
        self.aircraft
            .iter()
            .map(|(callsign, designator)| format!("{callsign} ({designator})"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    version: u32,
    aircraft: BTreeMap<String, String>,
}
