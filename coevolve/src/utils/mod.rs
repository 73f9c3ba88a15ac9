//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod iterators;
pub use self::iterators::*;

mod math;
pub use self::math::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod size;
pub use self::size::*;

mod timing;
pub use self::timing::*;
