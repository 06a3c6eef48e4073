//! Guest journeys: the itinerary pages written for each stay.
//!
//! Journeys come from two places. A small set is built into the crate, and the rest are
//! parsed from Markdown guest documents with a `---` frontmatter block. Both end up in a
//! [`JourneyRegistry`] keyed by the stay's slug.

pub mod defaults;
mod load;
mod model;
mod parse;
mod registry;

pub use load::*;
pub use model::*;
pub use parse::*;
pub use registry::*;
