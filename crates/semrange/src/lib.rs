//! Semantic versioning library with node-style range matching
//!
//! This crate parses semantic versions, orders them by semver precedence and
//! decides whether a version satisfies a range expression written in the
//! node ecosystem grammar (`^1.2.3`, `~1.2`, `1.x || >=2.5.0 <3`,
//! `1.0.0 - 2.0.0`, ...).

mod comparator;
mod identifier;
pub mod range;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::{Identifier, IdentifierError};
pub use range::{Operator, RangeParseError, RangeParser, RangeSet};
pub use semver::Semver;
pub use version::{Version, MAX_COMPONENT};
pub use version_parser::{VersionParser, VersionParserError};
