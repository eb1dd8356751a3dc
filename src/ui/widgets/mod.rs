// SPDX-License-Identifier: MPL-2.0
pub mod motion_frame;
pub mod orbit_scene;
pub mod ornament;
pub mod pointer_area;

pub use motion_frame::{motion_frame, MotionFrame};
pub use ornament::Ornament;
pub use pointer_area::{pointer_area, PointerArea, PointerEvent};
