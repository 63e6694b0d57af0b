mod account;
mod phone;
mod points;

pub use account::*;
pub use phone::*;
pub use points::*;
