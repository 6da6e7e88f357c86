//! Domain types shared by the catalog store and the HTTP layer.

pub mod error;
pub mod track;
pub mod types;
