pub mod bounds;
pub mod float;
pub mod quaternion;
pub mod vec;
