//! FAQ persistence: records, the embedding byte codec, and stores.
//!
//! [`FaqStore`] is the seam between the matching core and whatever holds the
//! entries. [`MemoryFaqStore`] backs tests and model-less demos;
//! [`DiskFaqStore`] is the file-per-entry store the server runs on.

pub mod codec;
mod disk;
pub mod error;
mod memory;
mod model;
mod store;

pub use codec::{BYTES_PER_F32, embedding_bytes_to_f32, f32_to_embedding_bytes};
pub use disk::DiskFaqStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryFaqStore;
pub use model::FaqEntry;
pub use store::FaqStore;
