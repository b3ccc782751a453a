//! Entity-Update-/Edit-Protokoll: Registry fertiger Shapes und die
//! exklusive Edit-Session mit Helper-Markern.

mod registry;
mod session;

pub use registry::{RegisteredShape, ShapeRegistry, UpdateEffect};
pub use session::{EditSession, HelperMarker};
