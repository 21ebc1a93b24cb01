//! Expression trees for PPP.
//!
//! Two phases live here because they are inverses of each other:
//! - [`build`] reduces the token stream into a [`Forest`] of expression trees
//! - [`linearize`] flattens a checked forest back into a postfix [`Program`]
//!
//! [`Forest`]: ppp_ir::Forest
//! [`Program`]: ppp_ir::Program

mod build;
mod linearize;

pub use build::{build, BuildError};
pub use linearize::linearize;
