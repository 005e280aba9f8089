use crate::{circuits, config, inputs};
use enum_derive_2018::EnumFromInner;

macro_attr_2018::macro_attr! {
    #[derive(Debug, EnumFromInner!)]
    pub enum RunError {
        Input(inputs::Error),
        Circuits(circuits::Error),
        Config(config::ConfigParseError),
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Input(e) => write!(f, "{}", e),
            RunError::Circuits(e) => write!(f, "{}", e),
            RunError::Config(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalAnswers {
    pub covered_ids: usize,
    pub covered_total: u128,
}

pub fn solve_intervals(inventory: &inputs::Inventory) -> IntervalAnswers {
    if let Some(span) = inventory.ranges.span() {
        log::debug!("{} ranges within {}", inventory.ranges.len(), span);
    }
    let start = std::time::Instant::now();
    let covered_ids = inventory.ranges.count_covered(&inventory.ids);
    log::debug!("coverage query took {:?}", start.elapsed());
    let start = std::time::Instant::now();
    let covered_total = inventory.ranges.covered_count();
    log::debug!("merge took {:?}", start.elapsed());
    IntervalAnswers {
        covered_ids,
        covered_total,
    }
}

pub fn run_intervals(path: impl AsRef<std::path::Path>) -> Result<IntervalAnswers, RunError> {
    let inventory = inputs::load_inventory(path)?;
    Ok(solve_intervals(&inventory))
}

pub fn run_circuits(
    path: impl AsRef<std::path::Path>,
    config: &config::Config,
) -> Result<circuits::Answers, RunError> {
    let points = inputs::load_points(path)?;
    log::debug!(
        "connecting {} points, {} {} connections, top {}",
        points.len(),
        config.budget.limit,
        config.budget.counting,
        config.top_components
    );
    Ok(circuits::solve(
        &points,
        config.budget,
        config.top_components,
    )?)
}
