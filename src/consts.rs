/// BCM numbers in the order they are lit.
pub const LED_PINS: [u8; 3] = [
    14, // Pin 8
    15, // Pin 10
    18, // Pin 12
];

pub const REPETITIONS: usize = 6;
pub const HOLD_MS: u32 = 500; // ms each LED stays lit
