//! Dependency update extraction from Dependabot pull requests.
//!
//! Titles are tried first ([`extract_update_from_title`]); grouped PRs and
//! unconventional titles are read from the body ([`extract_updates`]).

mod body;
mod markdown;
mod title;
mod triple;

pub use body::{extract_updates, BodyShape, TableLayout};
pub use markdown::{strip_invisible, strip_markup};
pub use title::{extract_update_from_title, is_grouped_pr};
pub use triple::UpdateTriple;
