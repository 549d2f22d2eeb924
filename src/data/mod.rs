pub mod departments;

pub use departments::{bundled_department, bundled_departments};
