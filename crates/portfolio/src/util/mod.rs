pub mod color;
pub mod encode;
pub mod time;
