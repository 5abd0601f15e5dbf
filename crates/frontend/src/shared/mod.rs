pub mod download;
pub mod icons;
