//! Query adapter: free-form point text in, (point, label) pairs out.

pub mod adapter;
pub mod parser;

pub use adapter::{ClassifiedPoint, PointOrigin, QueryAdapter, QueryOutcome};
pub use parser::{parse_point, parse_points, ParsedPoints};
