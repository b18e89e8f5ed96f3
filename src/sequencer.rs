use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use tracing::debug;

/// Lights a row of pins one after another, holding each for a fixed time.
///
/// A pin is always driven low before the next one is driven high, so at most
/// one pin is lit at any instant.
#[derive(Debug)]
pub struct Sequencer<P, D, const N: usize> {
    pins: [P; N],
    delay: D,
    active: Option<usize>,
    iteration: usize,
}

impl<P: OutputPin, D: DelayNs, const N: usize> Sequencer<P, D, N> {
    pub fn new(pins: [P; N], delay: D) -> Self {
        Self {
            pins,
            delay,
            active: None,
            iteration: 0,
        }
    }

    /// Number of completed sweeps, which is also the index of the one in progress.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Sweeps `repetitions` times. Stops at the first pin error.
    pub fn run(&mut self, repetitions: usize, hold_ms: u32) -> Result<(), P::Error> {
        debug!("Running {repetitions} sweeps over {N} pins, {hold_ms} ms each");
        for _ in 0..repetitions {
            self.sweep(hold_ms)?;
        }
        Ok(())
    }

    /// Pulses every pin once, in order.
    pub fn sweep(&mut self, hold_ms: u32) -> Result<(), P::Error> {
        for index in 0..N {
            self.pulse(index, hold_ms)?;
        }
        self.iteration += 1;
        Ok(())
    }

    /// Drives pin `index` high, blocks for `hold_ms`, then drives it low.
    ///
    /// Panics if `index >= N`.
    #[tracing::instrument(level = "trace", skip(self), fields(iteration = self.iteration))]
    pub fn pulse(&mut self, index: usize, hold_ms: u32) -> Result<(), P::Error> {
        debug_assert!(self.active.is_none(), "pin {:?} still lit", self.active);
        let pin = &mut self.pins[index];
        pin.set_high()?;
        self.active = Some(index);
        self.delay.delay_ms(hold_ms);
        pin.set_low()?;
        self.active = None;
        Ok(())
    }
}
