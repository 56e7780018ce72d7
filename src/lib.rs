pub mod error;
pub mod logging;
pub mod permutation;
pub mod report;
pub mod sequence;

pub use error::Error;
pub use permutation::{permute, permute_by, visit_lexicographic, visit_lexicographic_by};
pub use sequence::{ParseError, Sequence};
