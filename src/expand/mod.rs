mod applier;
mod config;
mod error;
mod report;
mod stage;

pub use applier::{RuleApplier, RuleError};
pub use config::{default_config, load_config, ExpandConfig, ProductSelection, StageConfig};
pub use error::Error;
pub use report::{Expansion, StageReport};
pub use stage::run_stage;

use crate::model::pool::SpeciesPool;
use tracing::info;

/// Runs every configured stage in declared order against a seeded pool.
///
/// Stage execution is strictly sequential: each stage reads only labels
/// committed by seeding or by earlier stages. The returned [`Expansion`]
/// carries the grown pool and one [`StageReport`] per stage; a stage with
/// no output is reported, not an error, and downstream stages simply see
/// empty inputs.
pub fn expand<A>(
    mut pool: SpeciesPool<A::Structure>,
    config: &ExpandConfig,
    applier: &A,
) -> Result<Expansion<A::Structure>, Error>
where
    A: RuleApplier,
{
    config.validate()?;

    let mut reports = Vec::with_capacity(config.stages.len());
    for stage_config in &config.stages {
        reports.push(stage::run_stage(stage_config, &mut pool, applier)?);
    }

    info!(
        stages = reports.len(),
        species = pool.total(),
        "pathway expansion complete"
    );

    Ok(Expansion { pool, reports })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::label::GenerationLabel;
    use crate::model::structure::testing::{decane, hydrogen_atom, oxygen, FakeStructure};
    use pretty_assertions::assert_eq;
    use super::testing::DecaneRules;
    use std::collections::HashSet;

    fn seeded_pool() -> SpeciesPool<FakeStructure> {
        let mut pool = SpeciesPool::new();
        pool.insert("fuel", decane());
        pool.insert("H", hydrogen_atom());
        pool.insert("O2", oxygen());
        pool
    }

    fn formulas(pool: &SpeciesPool<FakeStructure>, label: &str) -> HashSet<String> {
        pool.get(&label.into())
            .iter()
            .map(|s| s.formula.clone())
            .collect()
    }

    #[test]
    fn decane_network_populates_every_generation() {
        let result = expand(seeded_pool(), default_config(), &DecaneRules).unwrap();
        let pool = &result.pool;

        // Five abstraction sites on linear decane; H2 never enters "R".
        assert_eq!(pool.len(&"R".into()), 5);
        assert_eq!(formulas(pool, "R"), HashSet::from(["C10H21".to_string()]));

        // One peroxy adduct per radical.
        assert_eq!(pool.len(&"ROO".into()), 5);
        assert_eq!(formulas(pool, "ROO"), HashSet::from(["C10H21O2".to_string()]));

        // Two migration channels per peroxy radical: same formula as ROO,
        // different connectivity, so structural identity keeps the sets apart.
        assert_eq!(pool.len(&"QOOH".into()), 10);
        assert_eq!(formulas(pool, "QOOH"), HashSet::from(["C10H21O2".to_string()]));
        let roo = pool.get(&"ROO".into());
        assert!(pool.get(&"QOOH".into()).is_disjoint(roo));

        // Second O2 addition.
        assert_eq!(pool.len(&"O2QOOH".into()), 10);
        assert_eq!(
            formulas(pool, "O2QOOH"),
            HashSet::from(["C10H21O4".to_string()])
        );
    }

    #[test]
    fn reports_track_each_stage_in_order() {
        let result = expand(seeded_pool(), default_config(), &DecaneRules).unwrap();
        assert_eq!(result.reports.len(), 4);

        let abstraction = &result.reports[0];
        assert_eq!(abstraction.output, GenerationLabel::from("R"));
        // union(fuel, H) crossed with itself: 2 × 2 invocations.
        assert_eq!(abstraction.invocations, 4);
        assert_eq!(abstraction.inserted, 5);
        assert!(abstraction.filtered > 0);
        assert_eq!(abstraction.failures, 0);

        let migration = &result.reports[2];
        assert_eq!(migration.output, GenerationLabel::from("QOOH"));
        assert_eq!(migration.invocations, 5);
        assert_eq!(migration.inserted, 10);
    }

    #[test]
    fn membership_is_deterministic_across_runs() {
        let first = expand(seeded_pool(), default_config(), &DecaneRules).unwrap();
        let second = expand(seeded_pool(), default_config(), &DecaneRules).unwrap();

        for label in ["fuel", "H", "O2", "R", "ROO", "QOOH", "O2QOOH"] {
            assert_eq!(
                first.pool.get(&label.into()),
                second.pool.get(&label.into()),
                "membership diverged for '{label}'"
            );
        }
    }

    #[test]
    fn unseeded_pool_degrades_to_empty_generations() {
        let result = expand(SpeciesPool::new(), default_config(), &DecaneRules).unwrap();

        for report in &result.reports {
            assert_eq!(report.inserted, 0);
            assert_eq!(report.failures, 0);
        }
        assert!(result.pool.get(&"O2QOOH".into()).is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_any_stage_runs() {
        let config = ExpandConfig { stages: Vec::new() };
        let result = expand(seeded_pool(), &config, &DecaneRules);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
