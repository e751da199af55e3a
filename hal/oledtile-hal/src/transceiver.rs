//! Framed bus transceiver
//!
//! A [`Transceiver`] sends one complete, already framed transaction whose
//! first byte is the device address in its on-wire write form (7-bit address
//! shifted left, R/W bit clear). This mirrors how a byte-level TWI master
//! clocks out the address as the first byte of every transaction.

/// Sends complete framed transactions
pub trait Transceiver {
    /// Error type for a failed transaction
    type Error;

    /// Transmit `frame` as one atomic addressed transaction
    ///
    /// `frame[0]` is the 8-bit write address, the remaining bytes are sent
    /// in order within the same transaction. Blocks until the transfer
    /// completes or fails.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

/// On-wire write address byte for a 7-bit device address
pub const fn address_byte(address: u8) -> u8 {
    address << 1
}

/// Error from [`I2cTransceiver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError<E> {
    /// The underlying bus reported a failure
    Bus(E),
    /// A frame without an address byte was handed to the transceiver
    EmptyFrame,
}

impl<E> From<E> for TransmitError<E> {
    fn from(e: E) -> Self {
        TransmitError::Bus(e)
    }
}

/// Adapts a 7-bit addressed [`I2cBus`](crate::I2cBus) into a [`Transceiver`]
///
/// The address byte is split off the frame and converted back to its 7-bit
/// form; the rest of the frame becomes the write payload.
pub struct I2cTransceiver<B> {
    bus: B,
}

impl<B> I2cTransceiver<B> {
    /// Wrap a bus
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give back the wrapped bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B> Transceiver for I2cTransceiver<B>
where
    B: crate::I2cBus,
{
    type Error = TransmitError<B::Error>;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let (&address, payload) = frame.split_first().ok_or(TransmitError::EmptyFrame)?;
        self.bus.write(address >> 1, payload)?;
        Ok(())
    }
}
