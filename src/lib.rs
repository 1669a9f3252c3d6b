pub mod checksum;
pub mod cli;
pub mod delta;
pub mod duplicates;
pub mod error;
pub mod inventory;
pub mod report;
pub mod scanner;
pub mod staging;

pub use checksum::file_checksum;
pub use cli::Cli;
pub use delta::compute_delta;
pub use duplicates::{DuplicateGroup, find_cross_duplicates, find_duplicates};
pub use error::{ChecksumError, CopyError, ScanError};
pub use inventory::{Fingerprint, Inventory, PhotoEntry};
pub use scanner::scan;
pub use staging::{StagingReport, stage_delta};
