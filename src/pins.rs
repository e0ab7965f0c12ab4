//! Pin and servo assignments for the room controller board.
//!
//! Single source of truth: the controller and the HAL adapter both reference
//! this module rather than hard-coding numbers.

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// Passive-infrared presence sensor. HIGH = someone in the room.
pub const INFRARED_PIN: u8 = 22;
/// Photoresistor comparator output. HIGH = enough ambient light.
pub const PHOTO_PIN: u8 = 13;

// ---------------------------------------------------------------------------
// Actuators — Digital
// ---------------------------------------------------------------------------

/// Smart bulb relay.
pub const LED_PIN: u8 = 18;
/// Ventilation fan relay.
pub const FAN_PIN: u8 = 6;

// ---------------------------------------------------------------------------
// Window servo
// ---------------------------------------------------------------------------

/// Servo duty (percent) that swings the window open.
pub const WINDOW_OPEN_ANGLE: u8 = 12;
/// Servo duty (percent) that pulls the window shut.
pub const WINDOW_CLOSED_ANGLE: u8 = 2;
