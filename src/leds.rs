use crate::consts::LED_PINS;
use rppal::gpio::{Gpio, OutputPin};
use std::error::Error;
use tracing::debug;

#[derive(Debug)]
pub struct Leds {
    pins: [OutputPin; 3],
}

impl Leds {
    pub fn init_leds() -> Result<Leds, Box<dyn Error>> {
        debug!("Initializing leds");
        let gpio = Gpio::new()?;
        // Start dark so nothing is lit before the sequence begins
        let [first, second, third] = LED_PINS.map(|number| gpio.get(number));
        let pins = [
            first?.into_output_low(),
            second?.into_output_low(),
            third?.into_output_low(),
        ];
        debug!("Claimed GPIO {LED_PINS:?}");
        Ok(Leds { pins })
    }

    /// The pins in the order they are lit.
    pub fn into_array(self) -> [OutputPin; 3] {
        self.pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rppal::system::DeviceInfo;

    fn hardware_enabled() -> bool {
        DeviceInfo::new().is_ok()
    }

    // Pins can only be claimed once per process, so one test owns them
    #[test]
    fn test_start_low_then_on_off() {
        if hardware_enabled() {
            let mut pins = Leds::init_leds().unwrap().into_array();
            for (pin, number) in pins.iter().zip(LED_PINS) {
                assert_eq!(pin.pin(), number);
                assert!(pin.is_set_low());
            }
            let pin = &mut pins[0];
            pin.set_high();
            assert!(pin.is_set_high());
            pin.set_low();
            assert!(pin.is_set_low());
        }
    }

    #[test]
    fn test_init_fails_without_gpio() {
        if !hardware_enabled() {
            assert!(Leds::init_leds().is_err());
        }
    }
}
