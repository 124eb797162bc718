#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

mod error;
pub use error::{Error, Result};

mod value;
pub use value::{AsSequence, Identity, Value};

pub mod coerce;
mod display;

mod sum;
pub use sum::sum;

mod duplicates;
pub use duplicates::find_duplicates;

mod count;
pub use count::{count, count_with_hasher};
