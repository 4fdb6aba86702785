//! Scryfall lookups for per-printing card data (Cardmarket id, frame and
//! border treatment, finishes)

mod bulk;
mod cache;
mod client;
mod descriptor;
mod resolver;

pub use bulk::BulkIndex;
pub use cache::DescriptorCache;
pub use client::{ScryfallClient, DEFAULT_BASE_URL, DEFAULT_DELAY};
pub use descriptor::{CardDescriptor, VisualType};
pub use resolver::SecondaryResolver;
