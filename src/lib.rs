pub mod grid;
pub mod stack;
pub mod director;
pub mod input;
pub mod session;
