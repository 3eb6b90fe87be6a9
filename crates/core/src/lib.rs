pub mod ids;
pub mod source;
pub mod status;
