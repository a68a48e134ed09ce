mod app_dirs;
mod tokio_fs;

pub use app_dirs::{AppDirsError, StashDirs};
pub use tokio_fs::TokioFileSystem;
