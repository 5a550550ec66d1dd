pub mod interface;
pub mod map_view;
pub mod models;
pub mod panorama;
pub mod sessions;
#[cfg(test)]
pub mod tests;
