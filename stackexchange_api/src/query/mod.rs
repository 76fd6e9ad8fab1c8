mod sort;
pub use self::sort::{Order, Sort};

mod params;
pub use self::params::{Params, STACK_OVERFLOW};
