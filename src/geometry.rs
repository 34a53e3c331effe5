pub mod indicator;
pub mod ring;
