//! I2C bus abstractions
//!
//! Provides the write-only I2C master trait used by the display driver,
//! along with an adapter for `embedded-hal` 1.0 blocking peripherals.

/// I2C bus master
///
/// The display driver never reads from the bus, so only addressed writes
/// are required from an implementation.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// The whole slice must go out as one transaction (single START, single
    /// STOP). The call blocks until the transfer completes or fails.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Adapter exposing any blocking `embedded-hal` I2C peripheral as an [`I2cBus`]
///
/// ```ignore
/// let i2c = embassy_stm32::i2c::I2c::new_blocking(p.I2C1, p.PB6, p.PB7, config);
/// let bus = HalI2c::new(i2c);
/// ```
pub struct HalI2c<T> {
    inner: T,
}

impl<T> HalI2c<T> {
    /// Wrap a peripheral
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Give back the wrapped peripheral
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T> I2cBus for HalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // SSD1306 modules are rated for fast mode
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
