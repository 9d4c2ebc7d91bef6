pub mod curve_look;
pub mod fft;
pub mod frame;
pub mod input;
pub mod series;
pub mod stats;
