pub mod image_io;
pub mod mapping_io;
