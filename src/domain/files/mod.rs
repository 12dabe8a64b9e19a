//! File reference domain module

mod file_record;
mod file_ref;

pub use file_record::{extension_of, is_image_extension, FileRecord, IMAGE_EXTENSIONS};
pub use file_ref::{looks_like_file_ref, parse_file_ref, strip_file_scheme, FILE_SCHEME};
