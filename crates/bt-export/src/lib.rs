/// Output modules for bitrame (textual bitmap format).

pub mod textmap;

pub use textmap::{parse, render, save};
