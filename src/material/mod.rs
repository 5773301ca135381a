mod material;
pub mod phong;
pub mod physical;

pub use material::{Material, MaterialDescriptor, Side};
pub use phong::Phong;
pub use physical::Physical;
