//! Infrastructure layer.

pub mod remote;

pub use self::remote::Remote;
#[cfg(feature = "http")]
pub use self::remote::Http;
