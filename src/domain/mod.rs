pub mod academics;
pub mod department;
pub mod news;
pub mod placements;

pub use academics::*;
pub use department::*;
pub use news::*;
pub use placements::*;
