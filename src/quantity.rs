#[macro_use]
mod macros;

pub mod cost;
pub mod energy;
pub mod light;
pub mod power;
pub mod time;
mod zero;

pub use self::zero::Zero;
