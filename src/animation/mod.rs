pub mod letter;
pub mod state;
