mod argument;
mod capture;
mod core;
mod storage;

pub use self::argument::*;
pub use self::core::*;
pub use self::storage::*;

pub(crate) use self::capture::InvalidCapture;
