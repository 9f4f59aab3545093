pub mod agents;
pub mod components;
pub mod objects;
mod utils;
