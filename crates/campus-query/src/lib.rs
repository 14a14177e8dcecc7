mod descriptor;
mod filter;
mod patch;
mod sort;

pub use descriptor::{QueryDescriptor, QueryNode};
pub use filter::{FilterOperator, FilterValue, WhereClause};
pub use patch::{NodePatch, PatchOutcome};
pub use sort::{OrderTerm, SortDirection};
