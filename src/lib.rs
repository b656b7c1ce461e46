//! Reads WordPress WXR exports and plans their import into another
//! content system.
//!
//! [`wxr::parse`] turns export text into an [`ImportBundle`]; a
//! [`RequestBuilder`] turns the bundle into ordered creation requests.
//!
//! ```no_run
//! use wxr_import::builder::{EntityKind, HaloDestination, RequestBuilder};
//!
//! # fn main() -> wxr_import::error::Result<()> {
//! let xml = std::fs::read_to_string("export.xml")?;
//! let bundle = wxr_import::wxr::parse(&xml)?;
//! let plan = RequestBuilder::new(&bundle, HaloDestination).plan(EntityKind::all());
//! for request in plan.requests() {
//!     println!("POST {}", request.resource);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod env;
pub mod error;
pub mod model;
pub mod wxr;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::RequestBuilder;
pub use model::ImportBundle;
