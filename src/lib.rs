pub mod datum;
pub mod list;
