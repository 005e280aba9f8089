mod config;
mod outputs;
mod range_union;

pub mod circuits;
pub mod disjoint_set;
pub mod inputs;
pub mod main_solve;

pub use circuits::{Answers, ConnectionBudget, Counting, Point};
pub use config::{
	Config,
	ConfigParseError,
	app_dirs,
	default_config_path,
	DEFAULT_CONFIG,
};
pub use disjoint_set::DisjointSet;
pub use outputs::{EnablementLevel, Report};
pub use range_union::{InclusiveRange, RangeUnion, is_covered, merge_ranges};
