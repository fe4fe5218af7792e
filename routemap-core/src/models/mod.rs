//! Contains models which describe what is shown on the map: page input, markers, route requests
//! and route results returned by the mapping provider.

mod coordinate;
pub use self::coordinate::Coordinate;

mod distance;
pub use self::distance::*;

mod marker;
pub use self::marker::*;

mod page;
pub use self::page::*;

mod route;
pub use self::route::*;
