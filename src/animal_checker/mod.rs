pub mod core;
pub mod interpret_effect;
pub mod main;
pub mod render;

#[cfg(test)]
mod tests;
