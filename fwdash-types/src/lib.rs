//! Types and pure logic behind the firmware version dashboard.
//!
//! Nothing in here touches the DOM or the network, so the whole
//! crate builds and tests natively.

pub mod catalog;
pub mod record;
pub mod util;
pub mod view;
