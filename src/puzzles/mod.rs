//! The puzzle families the solver knows.

pub mod lockout;
pub mod sliding;
pub mod tilt;
