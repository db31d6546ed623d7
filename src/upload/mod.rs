pub mod dto;
pub mod service;

pub use dto::{FileMetadata, FileUploadRequest};
pub use service::{FileService, PrivateFileService};
