// pointer/ - Pointer-driven decorative effects
//
// Both are inert on touch layouts: the constructors take the injected
// capability flags and produce a no-op variant rather than querying the
// environment themselves.

mod spotlight;
mod trail;

pub use spotlight::*;
pub use trail::*;
