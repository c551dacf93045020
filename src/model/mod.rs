//! Document model types.
//!
//! Layout types (`Document`, `Page`, `TextBlock`, `TextLine`, `TextSpan`)
//! carry the positioned, styled text a fragment source yields. Outline
//! types (`Outline`, `Heading`, `HeadingLevel`) carry the inferred result.

mod document;
mod outline;
mod page;
mod span;

pub use document::{Document, Metadata};
pub use outline::{Heading, HeadingLevel, Outline};
pub use page::{Page, TextBlock, TextLine};
pub use span::{TextSpan, FLAG_BOLD};
