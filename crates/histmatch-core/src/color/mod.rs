pub mod hsv;
pub mod process;
