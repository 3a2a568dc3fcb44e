//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod batch_record_repo;
pub mod qr_code_item_repo;

pub use batch_record_repo::BatchRecordRepo;
pub use qr_code_item_repo::QrCodeItemRepo;
