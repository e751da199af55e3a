//! oledtile Hardware Abstraction Layer
//!
//! This crate defines the narrow bus interface the SSD1306 driver consumes.
//! Chip-specific code only has to provide an [`I2cBus`] (or any blocking
//! `embedded-hal` I2C peripheral through [`HalI2c`]); the driver itself only
//! ever sees a [`Transceiver`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledtile-ssd1306 (framer / controller) │
//! └─────────────────────────────────────────┘
//!                     │ Transceiver::transmit([addr, ctrl, ...])
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  I2cTransceiver  (this crate)           │
//! └─────────────────────────────────────────┘
//!                     │ I2cBus::write(addr7, [ctrl, ...])
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  HalI2c<embedded_hal::i2c::I2c>         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - 7-bit addressed write transactions
//! - [`transceiver::Transceiver`] - one framed transaction per call

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod transceiver;

pub use i2c::{HalI2c, I2cBus, I2cConfig};
pub use transceiver::{address_byte, I2cTransceiver, TransmitError, Transceiver};
