mod projection;

pub use projection::{VentActivationRecipe, project};
