// src/utilities/mod.rs

pub mod clock;
pub mod encoding;
pub mod math;
pub mod output;

pub use clock::{day, hour, minute, month, second, year};
pub use encoding::{decode_base64, encode_base64};
pub use math::{clamp, degrees, dist, max, min, radians};
