//! Dataset loading, filtering and aggregation.

mod dataset;
pub use dataset::{
    CrimeRow, Dataset, DatasetError, PROPERTY_RATE_COLUMN, STATE_COLUMN, VIOLENT_RATE_COLUMN,
    YEAR_COLUMN,
};

mod rollup;
pub use rollup::{mean, rollup_mean, YearValue};

mod loaders;
pub use loaders::{peak, rate_by_year, split_at_peak, states_for_year, Metric, StatePoint};

pub mod source;
pub use source::DatasetCache;
