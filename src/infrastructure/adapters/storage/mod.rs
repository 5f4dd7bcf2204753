//! Storage Adapter - 文件系统存储实现

mod fs_storage;

pub use fs_storage::{FsDirectoryEnumerator, FsTextSource};
