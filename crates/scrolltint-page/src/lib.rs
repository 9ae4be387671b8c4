//! Lexer, parser, AST, and block layout for **scrolltint page markup**
//! (`.tint`).
//!
//! A page is a tree of elements. Each element has a tag, an optional inline
//! label, and a block mixing `key: value` attributes with child elements.
//! Color points are ordinary attributes:
//!
//! ```rust
//! use scrolltint_page::parse_str;
//!
//! let src = r#"
//!     Page {
//!         Section "Dawn" {
//!             height: 720
//!             data-color-point: "255, 94, 58"
//!             data-color-point-classname: dawn
//!         }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! let points = doc.select_with_attr("data-color-point");
//! assert_eq!(points.len(), 1);
//! assert_eq!(points[0].attr_str("data-color-point-classname"), Some("dawn"));
//! ```
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `PageDocument`, `Element`, `Attr`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`layout`] | `PageLayout`, `LayoutBox` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |

pub mod ast;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod parser;

pub use ast::{Element, PageDocument, Value};
pub use error::ParseError;
pub use layout::{LayoutBox, PageLayout};
pub use parser::parse_str;
