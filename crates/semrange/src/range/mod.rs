//! Range expressions: parsing and evaluation

mod evaluator;
mod operator;
mod parser;
mod partial;
mod range_set;

pub use operator::{InvalidOperatorError, Operator};
pub use parser::{RangeParseError, RangeParser};
pub use partial::{Component, PartialVersion, PartialVersionError};
pub use range_set::{Atom, Clause, RangeSet};
