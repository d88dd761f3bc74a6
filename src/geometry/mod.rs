// Haupt-Geometrie-Modul
// Exportiert alle öffentlichen Typen und Funktionen

pub mod types;
pub mod utils;
pub mod validation;

// Re-exports für einfachen Zugriff
pub use types::{Point, Triangle, COLLINEAR_EPSILON};
pub use utils::distance;
