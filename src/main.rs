use crate::consts::{HOLD_MS, REPETITIONS};
use crate::leds::Leds;
use crate::sequencer::Sequencer;
use rppal::hal::Delay;
use rppal::system::DeviceInfo;
use std::error::Error;
use tracing::{info, warn};

mod consts;
mod leds;
mod logging;
mod sequencer;

fn main() -> Result<(), Box<dyn Error>> {
    let _guard = logging::init();

    match DeviceInfo::new() {
        Ok(device) => info!("Sequencing LEDs on a {}", device.model()),
        Err(error) => warn!("Unknown board: {error}"),
    }

    let leds = Leds::init_leds()?;
    let mut sequencer = Sequencer::new(leds.into_array(), Delay::new());
    sequencer.run(REPETITIONS, HOLD_MS)?;
    info!("Finished {} sweeps", sequencer.iteration());

    // Dropping the sequencer resets every pin to its previous mode
    Ok(())
}
