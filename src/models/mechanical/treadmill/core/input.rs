mod error;
mod field;
mod parameters;

pub use error::InputError;
pub use field::{CoreField, Parameter};
pub use parameters::{ParameterSet, SecondaryPulleys};
pub(crate) use parameters::{positive, required};
