use super::error::Error;
use crate::model::label::GenerationLabel;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_PATHWAYS_TOML: &str = include_str!("../../resources/lowt.pathways.toml");

static DEFAULT_PATHWAYS: OnceLock<ExpandConfig> = OnceLock::new();

/// The ordered stage list defining one pathway topology.
///
/// Changing the stages or their order defines a different network; a
/// configuration is fixed for the lifetime of a run.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpandConfig {
    pub stages: Vec<StageConfig>,
}

/// One configured step of the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct StageConfig {
    /// One or two input slots. Each slot is resolved as the union of its
    /// labels against the pool. A single slot applies the family to each
    /// structure individually (unary expansion, e.g. isomerization); two
    /// slots apply it to every pair drawn from the first and second
    /// resolved sets.
    pub inputs: Vec<Vec<GenerationLabel>>,
    /// Rule family name passed to the rule applier, e.g. "H_Abstraction".
    pub family: String,
    /// Label under which filtered products are inserted.
    pub output: GenerationLabel,
    /// Which product positions of each candidate to keep.
    #[serde(default)]
    pub select: ProductSelection,
    /// Products with this molecular formula are dropped (e.g. the "H2"
    /// byproduct of hydrogen abstraction).
    #[serde(default)]
    pub exclude_formula: Option<String>,
}

/// Deterministic product-position policy for multi-product reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSelection {
    /// Keep only the first product of each candidate.
    #[default]
    First,
    /// Keep every product of each candidate.
    All,
}

impl ExpandConfig {
    /// Parses a stage list from TOML and validates its shape.
    pub fn from_toml(toml_str: &str) -> Result<Self, Error> {
        let config: ExpandConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the structural invariants of the stage list: at least one
    /// stage, one or two non-empty input slots per stage, and non-empty
    /// family and output names.
    pub fn validate(&self) -> Result<(), Error> {
        if self.stages.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one stage is required".to_string(),
            ));
        }
        for (idx, stage) in self.stages.iter().enumerate() {
            if stage.inputs.is_empty() || stage.inputs.len() > 2 {
                return Err(Error::InvalidConfig(format!(
                    "stage {} declares {} input slots; expected 1 or 2",
                    idx,
                    stage.inputs.len()
                )));
            }
            if stage.inputs.iter().any(Vec::is_empty) {
                return Err(Error::InvalidConfig(format!(
                    "stage {} has an input slot with no labels",
                    idx
                )));
            }
            if stage.family.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "stage {} has an empty rule family name",
                    idx
                )));
            }
            if stage.output.as_str().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "stage {} has an empty output label",
                    idx
                )));
            }
        }
        Ok(())
    }
}

/// Loads a stage list from custom TOML, or returns the built-in
/// low-temperature oxidation network when `custom_toml` is `None`.
pub fn load_config(custom_toml: Option<&str>) -> Result<ExpandConfig, Error> {
    match custom_toml {
        Some(toml_str) => ExpandConfig::from_toml(toml_str),
        None => Ok(default_config().clone()),
    }
}

/// The built-in four-stage network: hydrogen abstraction to "R", O2
/// recombination to "ROO", intramolecular hydrogen migration to "QOOH",
/// and a second O2 recombination to "O2QOOH".
pub fn default_config() -> &'static ExpandConfig {
    DEFAULT_PATHWAYS.get_or_init(|| {
        ExpandConfig::from_toml(DEFAULT_PATHWAYS_TOML)
            .expect("Failed to parse embedded default pathways. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_describes_low_t_network() {
        let config = default_config();
        assert_eq!(config.stages.len(), 4);

        let outputs: Vec<&str> = config
            .stages
            .iter()
            .map(|s| s.output.as_str())
            .collect();
        assert_eq!(outputs, ["R", "ROO", "QOOH", "O2QOOH"]);

        let abstraction = &config.stages[0];
        assert_eq!(abstraction.family, "H_Abstraction");
        assert_eq!(abstraction.inputs.len(), 2);
        assert_eq!(abstraction.select, ProductSelection::All);
        assert_eq!(abstraction.exclude_formula.as_deref(), Some("H2"));

        let migration = &config.stages[2];
        assert_eq!(migration.family, "intra_H_migration");
        assert_eq!(migration.inputs.len(), 1);
        assert_eq!(migration.select, ProductSelection::First);
    }

    #[test]
    fn custom_config_parses_valid_toml() {
        let custom = r#"
            [[stages]]
            inputs = [["seed"]]
            family = "Beta_Scission"
            output = "fragments"
        "#;
        let config = load_config(Some(custom)).unwrap();
        assert_eq!(config.stages.len(), 1);
        assert_eq!(config.stages[0].select, ProductSelection::First);
        assert!(config.stages[0].exclude_formula.is_none());
    }

    #[test]
    fn errors_on_invalid_toml() {
        let result = load_config(Some("not valid [[[ toml"));
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn rejects_empty_stage_list() {
        let result = ExpandConfig::from_toml("stages = []");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_three_input_slots() {
        let custom = r#"
            [[stages]]
            inputs = [["a"], ["b"], ["c"]]
            family = "F"
            output = "out"
        "#;
        let result = ExpandConfig::from_toml(custom);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_input_slot() {
        let custom = r#"
            [[stages]]
            inputs = [[]]
            family = "F"
            output = "out"
        "#;
        let result = ExpandConfig::from_toml(custom);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_family_name() {
        let custom = r#"
            [[stages]]
            inputs = [["a"]]
            family = ""
            output = "out"
        "#;
        let result = ExpandConfig::from_toml(custom);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
