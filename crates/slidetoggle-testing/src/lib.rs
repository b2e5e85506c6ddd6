//! Testing utilities for SlideToggle
//!
//! - [`RecordingSurface`]: a surface that logs every call the toggle makes
//! - [`ManualVeto`]: veto listeners whose verdict the test decides later
//! - [`ToggleHarness`]: runtime, manual clock and toggle wired together,
//!   with helpers for drags, taps and frame pumping

mod assertions;
mod harness;
mod surface;
mod veto;

pub use assertions::{assert_approx_eq, assert_point_approx_eq};
pub use harness::{ToggleHarness, FRAME_MILLIS};
pub use surface::{RecordingSurface, SurfaceCall};
pub use veto::{immediate_veto, ManualVeto, VetoRequest};

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_point_approx_eq};
    pub use crate::harness::ToggleHarness;
    pub use crate::surface::{RecordingSurface, SurfaceCall};
    pub use crate::veto::ManualVeto;
}
