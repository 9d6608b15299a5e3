pub mod batch_error;
pub mod batch_report;
pub mod process_avatars_use_case;
