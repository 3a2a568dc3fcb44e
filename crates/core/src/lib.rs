//! Domain logic for the QR code service.
//!
//! Everything here is transport-agnostic: the API crate maps HTTP requests
//! onto these functions, and the db crate supplies the [`batch::BatchStore`]
//! implementation backed by PostgreSQL.

pub mod batch;
pub mod color;
pub mod encoder;
pub mod error;
pub mod generation;
pub mod logo;
pub mod qr;
pub mod submission;
pub mod types;
