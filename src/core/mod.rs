pub mod calculator;
pub mod check;
pub mod logic;
pub mod reconstruct;
