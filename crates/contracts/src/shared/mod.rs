//! Shared building blocks of every tabular page: the record model, filter
//! criteria, aggregation and the mutation-response envelope.

pub mod aggregate;
pub mod criteria;
pub mod record;
pub mod response;
pub mod table;

pub use aggregate::{aggregate, GroupKey};
pub use criteria::FilterCriteria;
pub use record::Record;
pub use response::MutationResponse;
pub use table::{LoadPhase, TableData};
