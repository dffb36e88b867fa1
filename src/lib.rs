pub mod config;
pub mod error;
pub mod layouts;
pub mod stream;
pub mod transcoder;

pub use error::{DvError, DvResult};
pub use transcoder::{decode, encode, Direction, Transcoder};
