pub mod calculator;
pub mod clock;
pub mod user;
