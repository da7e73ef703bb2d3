use super::applier::{RuleApplier, RuleError};
use super::config::{ProductSelection, StageConfig};
use super::error::Error;
use super::report::StageReport;
use crate::model::candidate::ReactionCandidate;
use crate::model::pool::SpeciesPool;
use crate::model::structure::Structure;
use tracing::{debug, warn};

/// Executes one transformation stage against the pool.
///
/// Input slots are resolved through [`SpeciesPool::union`] before any
/// products are inserted, so a stage reading and writing the same label
/// sees a fixed input snapshot. Empty inputs produce an empty output and
/// return normally; only configuration and resource failures abort.
pub fn run_stage<A>(
    stage: &StageConfig,
    pool: &mut SpeciesPool<A::Structure>,
    applier: &A,
) -> Result<StageReport, Error>
where
    A: RuleApplier,
{
    let slots: Vec<Vec<A::Structure>> = stage
        .inputs
        .iter()
        .map(|labels| pool.union(labels).into_iter().collect())
        .collect();

    let mut report = StageReport::new(&stage.family, stage.output.clone());

    match slots.as_slice() {
        [singles] => {
            for s in singles {
                apply_one(stage, std::slice::from_ref(s), applier, pool, &mut report)?;
            }
        }
        [first, second] => {
            for a in first {
                for b in second {
                    let pair = [a.clone(), b.clone()];
                    apply_one(stage, &pair, applier, pool, &mut report)?;
                }
            }
        }
        slots => {
            return Err(Error::InvalidConfig(format!(
                "stage producing '{}' declares {} input slots; expected 1 or 2",
                stage.output,
                slots.len()
            )));
        }
    }

    if report.inserted == 0 {
        warn!(
            family = %stage.family,
            output = %stage.output,
            invocations = report.invocations,
            "stage produced no new species"
        );
    } else {
        debug!(
            family = %stage.family,
            output = %stage.output,
            inserted = report.inserted,
            duplicates = report.duplicates,
            filtered = report.filtered,
            failures = report.failures,
            "stage complete"
        );
    }

    Ok(report)
}

fn apply_one<A>(
    stage: &StageConfig,
    inputs: &[A::Structure],
    applier: &A,
    pool: &mut SpeciesPool<A::Structure>,
    report: &mut StageReport,
) -> Result<(), Error>
where
    A: RuleApplier,
{
    report.invocations += 1;

    let candidates = match applier.generate(inputs, &stage.family) {
        Ok(candidates) => candidates,
        Err(RuleError::Transformation(detail)) => {
            warn!(
                family = %stage.family,
                output = %stage.output,
                detail = %detail,
                "rule application failed; skipping input combination"
            );
            report.failures += 1;
            return Ok(());
        }
        Err(RuleError::Resource(detail)) => {
            return Err(Error::Resource {
                family: stage.family.clone(),
                output: stage.output.clone(),
                detail,
            });
        }
    };

    for candidate in &candidates {
        report.candidates += 1;
        for product in selected_products(candidate, stage.select) {
            if let Some(excluded) = stage.exclude_formula.as_deref() {
                if product.formula() == excluded {
                    report.filtered += 1;
                    continue;
                }
            }
            if pool.insert(stage.output.clone(), product.clone()) {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }
    }

    Ok(())
}

fn selected_products<S: Structure>(
    candidate: &ReactionCandidate<S>,
    select: ProductSelection,
) -> &[S] {
    match select {
        ProductSelection::All => &candidate.products,
        ProductSelection::First => match candidate.products.first() {
            Some(first) => std::slice::from_ref(first),
            None => &[],
        },
    }
}
