#[cfg(test)]
pub mod impl_fake;
pub mod impl_egui;
pub mod interface;
