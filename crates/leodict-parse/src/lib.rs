pub mod extract;
pub mod render;
pub mod text;

pub use extract::{extract_sections, ExtractError};
pub use render::render_sections;
