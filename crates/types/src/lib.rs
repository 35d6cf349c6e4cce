pub mod color;
pub mod ids;

pub use color::HexColor;
pub use ids::{ControlId, Tag};
