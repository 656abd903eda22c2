pub mod channel;
pub mod color;
pub mod consts;
pub mod error;
pub mod io;
pub mod matching;
pub mod pipeline;
