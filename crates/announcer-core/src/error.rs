use thiserror::Error;

/// Result type alias for announcer operations
pub type Result<T> = std::result::Result<T, AnnounceError>;

/// Errors that can occur while resolving an identity or announcing it
///
/// None of these are recovered locally: the first error encountered
/// propagates to the caller, which terminates the process.
#[derive(Error, Debug)]
pub enum AnnounceError {
    /// OS hostname lookup failed
    #[error("hostname lookup failed: {0}")]
    HostLookup(String),

    /// Interface address enumeration failed
    #[error("interface enumeration failed: {0}")]
    IpEnumeration(String),

    /// Every enumerated address matched the loopback literal, or the
    /// enumeration came back empty
    #[error("no usable interface address found")]
    NoUsableAddress,

    /// The registry base address is not a usable URL
    #[error("invalid registry address: {0}")]
    InvalidRegistryUrl(String),

    /// The PUT never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The registry answered with a status other than 200
    #[error("announce rejected by registry (status {status})")]
    AnnounceFailed {
        /// HTTP status code the registry responded with
        status: u16,
    },
}

impl AnnounceError {
    /// Returns true if the error came from identity resolution, before
    /// any request was built
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::HostLookup(_) | Self::IpEnumeration(_) | Self::NoUsableAddress
        )
    }

    /// Returns the registry's HTTP status code for rejected announcements
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::AnnounceFailed { status } => Some(*status),
            _ => None,
        }
    }
}
