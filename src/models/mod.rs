pub mod booking;
pub mod enums;
pub mod journal;
pub mod mood;
pub mod profile;

pub use booking::*;
pub use enums::*;
pub use journal::*;
pub use mood::*;
pub use profile::*;
