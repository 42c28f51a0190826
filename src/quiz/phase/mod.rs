mod answering;
mod feedback;
mod results;

pub use self::answering::*;
pub use self::feedback::*;
pub use self::results::*;
