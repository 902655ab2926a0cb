pub mod files;
pub mod gateway;

pub use files::{ensure_planner_dir, init_local_dir, log_file, report_file};
pub use gateway::{load_planner, save_planner, BlobStore, FileBlobStore};

#[cfg(test)]
pub use gateway::{BlobKey, MemoryBlobStore};
