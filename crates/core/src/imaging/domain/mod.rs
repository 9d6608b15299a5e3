pub mod image_reader;
pub mod image_writer;
pub mod imaging_error;
