//! Trait definitions for external interactions
//!
//! These traits define the boundary between fetch logic and the network.
//! Infrastructure implementations live in other crates.

/// Trait for issuing a single blocking read against the remote API
///
/// Implemented by the infrastructure layer (rhevent-sdk)
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// GET `url` and return the response body as text
    ///
    /// A client or server error status must be reported as `Err`; only a
    /// success status yields the body.
    fn get_text(&self, url: &str) -> Result<String, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn get_text(&self, url: &str) -> Result<String, Self::Error> {
        (**self).get_text(url)
    }
}
