//! Artifact persistence.
//!
//! Every artifact lands in one flat directory under a name derived only from
//! its code (`<prefix><code>.<extension>`), so saving the same code twice
//! yields the same path and the later file replaces the earlier one.
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! failed save never leaves a truncated image under the final name.

mod error;
mod naming;
mod store;

pub use error::{Result, StorageError};
pub use naming::FileNaming;
pub use store::ArtifactStore;
