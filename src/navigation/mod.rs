//! Call sites that hand resolved paths to a host
//!
//! Neither the router nor the link navigates or renders anything. They
//! resolve a route template with [`crate::resolve`] and pass the result on.

mod history;
mod link;
mod router;

pub use history::MemoryHistory;
pub use link::{Link, TypedLink};
pub use router::{NavOptions, Navigator, TypedRouter};
