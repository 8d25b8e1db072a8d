//! Region records, region documents, and their on-disk form.

mod collection;
mod persistence;
mod region;
mod source;

pub use collection::{DocumentLayout, RegionDocument};
pub use persistence::{content_hash, smooth_path};
pub use region::Region;
pub use source::SourceMetadata;
