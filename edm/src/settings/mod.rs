use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;

pub mod conf_weights;
pub mod conf_alignment;

pub use self::conf_weights::*;
pub use self::conf_alignment::*;

use errors::*;

/// Settings of an evaluation run. They are passed explicitly to `Evaluator`, there is no
/// process-wide instance.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub weights: Weights,
    pub misalignment: MisalignmentPolicy
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            weights: Weights::default(),
            misalignment: MisalignmentPolicy::Truncate
        }
    }
}

impl Settings {
    /// Load settings from YAML (or JSON) text
    pub fn from_yaml_str(text: &str) -> Result<Settings> {
        let settings: Settings = serde_yaml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(fsettings: P) -> Result<Settings> {
        let fsettings = fsettings.as_ref();
        let reader = File::open(fsettings)
            .map(BufReader::new)
            .chain_err(|| format!("Cannot open settings file: {}", fsettings.display()))?;
        let settings: Settings = serde_yaml::from_reader(reader)
            .chain_err(|| format!("Invalid settings file: {}", fsettings.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
weights: {:?}
misalignment: {:?}
**********************************************************************
"#,
    self.weights,
    self.misalignment)
    }
}
