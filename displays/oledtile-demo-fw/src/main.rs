//! oledtile Demo Firmware
//!
//! Drives a 128x64 SSD1306 module from an STM32F042K6 over I2C1
//! (PB6=SCL, PB7=SDA): brings the panel up, draws a tile border and walks
//! a smiley back and forth across the middle of the screen.

#![no_std]
#![no_main]

mod tiles;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use oledtile_hal::{HalI2c, I2cConfig, I2cTransceiver, Transceiver};
use oledtile_ssd1306::{Error, Ssd1306, Ssd1306Config, Tile, PAGES, TILES_PER_PAGE, TILE_SIZE};

use crate::tiles::{BLANK, CHECKER, FRAME, SMILEY};

/// Page the smiley walks along
const WALK_PAGE: u8 = 3;

/// Animation step interval
const STEP_MS: u64 = 150;

/// Delay between initialization attempts
const RETRY_MS: u64 = 1000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("oledtile demo starting...");

    let p = embassy_stm32::init(Default::default());

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(I2cConfig::FAST.frequency);

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);
    let xcvr = I2cTransceiver::new(HalI2c::new(i2c));
    let mut display = Ssd1306::new(xcvr, Ssd1306Config::default());

    bring_up(&mut display).await;

    let mut ticker = Ticker::every(Duration::from_millis(STEP_MS));
    let mut walker = Walker::new();

    loop {
        ticker.next().await;

        if let Err(e) = walker.step(&mut display) {
            warn!("Draw failed: {:?}, restarting display", e);
            bring_up(&mut display).await;
            walker = Walker::new();
        }
    }
}

/// Initialize the panel and draw the static scene, retrying until it sticks
async fn bring_up<T: Transceiver>(display: &mut Ssd1306<T>)
where
    T::Error: Format,
{
    loop {
        match display.initialize().and_then(|()| draw_scene(display)) {
            Ok(()) => {
                info!("OLED initialized");
                return;
            }
            Err(e) => {
                error!("Failed to initialize display: {:?}", e);
                Timer::after(Duration::from_millis(RETRY_MS)).await;
            }
        }
    }
}

/// Border of frame tiles with a checkered band under the walking row
fn draw_scene<T: Transceiver>(display: &mut Ssd1306<T>) -> Result<(), Error<T::Error>> {
    let edge: [Tile; TILES_PER_PAGE] = [FRAME; TILES_PER_PAGE];
    let last_page = (PAGES - 1) as u8;
    let last_column = ((TILES_PER_PAGE - 1) * TILE_SIZE) as u8;

    display.draw_tiles(0, 0, &edge)?;
    display.draw_tiles(last_page, 0, &edge)?;
    for page in 1..last_page {
        display.draw_tile(page, 0, &FRAME)?;
        display.draw_tile(page, last_column, &FRAME)?;
    }

    let band: [Tile; TILES_PER_PAGE - 2] = [CHECKER; TILES_PER_PAGE - 2];
    display.draw_tiles(WALK_PAGE + 2, TILE_SIZE as u8, &band)
}

/// Smiley bouncing between the border columns
struct Walker {
    slot: usize,
    forward: bool,
    inverted: bool,
}

impl Walker {
    const FIRST: usize = 1;
    const LAST: usize = TILES_PER_PAGE - 2;

    fn new() -> Self {
        Self {
            slot: Self::FIRST,
            forward: true,
            inverted: false,
        }
    }

    fn step<T: Transceiver>(&mut self, display: &mut Ssd1306<T>) -> Result<(), Error<T::Error>> {
        let previous = self.slot;

        if self.forward && self.slot == Self::LAST {
            self.forward = false;
        } else if !self.forward && self.slot == Self::FIRST {
            self.forward = true;
            // Flip polarity once per round trip
            self.inverted = !self.inverted;
            display.set_inverted(self.inverted)?;
        }
        self.slot = if self.forward { self.slot + 1 } else { self.slot - 1 };

        display.draw_tile(WALK_PAGE, Self::column(previous), &BLANK)?;
        display.draw_tile(WALK_PAGE, Self::column(self.slot), &SMILEY)?;

        trace!("Smiley at slot {}", self.slot);
        Ok(())
    }

    fn column(slot: usize) -> u8 {
        (slot * TILE_SIZE) as u8
    }
}
