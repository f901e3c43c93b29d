//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements               | Connects to             |
//! |------------|--------------------------|-------------------------|
//! | `hardware` | SensorPort, InputPort    | ESP32 ADC, GPIO, I2C    |
//! |            | ActuatorPort             | ESP32 GPIO              |
//! | `display`  | DisplayPort              | SSD1306 128x32 panel    |
//! | `log_sink` | EventSink                | Serial log output       |
//! | `time`     | ClockPort                | ESP32 system timer      |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod time;
