//! Error types for the SSD1306 driver

use core::fmt;

/// Errors that can occur while driving the display
///
/// Generic over the transceiver's error type so bus failures reach the
/// caller unchanged. Nothing is retried: a failed multi-command operation
/// leaves the controller in whatever state the completed commands produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transceiver could not complete a transaction
    Transport(E),
    /// A data block does not fit in one transaction frame
    PayloadTooLarge,
    /// The operation needs a completed `initialize()` first
    NotInitialized,
}

// Allow `?` on raw transceiver results.
impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
            Error::PayloadTooLarge => write!(f, "data block exceeds frame capacity"),
            Error::NotInitialized => write!(f, "display not initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(e) => defmt::write!(f, "transport error: {}", e),
            Error::PayloadTooLarge => defmt::write!(f, "data block exceeds frame capacity"),
            Error::NotInitialized => defmt::write!(f, "display not initialized"),
        }
    }
}
