//! Page components, one per route.

mod community;
mod explore;
mod festivals;
mod landing;
mod monastery;

pub use community::Community;
pub use explore::Explore;
pub use festivals::Festivals;
pub use landing::Landing;
pub use monastery::MonasteryDetail;
