//! Testing utilities and robot harness for drawerkit.

pub mod robot;
pub mod scheduler;
pub mod surface;

pub use robot::DrawerRobot;
pub use scheduler::TestScheduler;
pub use surface::{TestGeometry, TestPage, TestSurface};

pub mod prelude {
    pub use crate::robot::DrawerRobot;
    pub use crate::scheduler::TestScheduler;
    pub use crate::surface::{TestGeometry, TestPage, TestSurface};
}
