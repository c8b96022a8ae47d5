//! # Analyzer (Parser) System
//!
//! The Analyzer module turns markup text into an [`Element`](crate::ast::Element)
//! tree using a Parser Combinator pattern.
//!
//! ## Core Components
//!
//! * **Parser Trait**: Defines the core parsing interface
//! * **Combinators**: Building blocks for creating complex parsers
//! * **Primitive Parsers**: The only parsers that read the text directly
//! * **Grammar Parsers**: Element, attribute and string rules
//!
//! ## Architecture Design
//!
//! 1. **Core Parser Interface**: The `Parser` trait defines the parsing contract
//! 2. **Combinators**: Small, composable parser units that can be combined
//! 3. **Specialized Parsers**: The markup grammar in [`parsers`]
//! 4. **Error Handling**: One [`ParseError`] variant per failure cause
//!
//! Parsers are plain values. A grammar rule is built once and can then be
//! run on any number of inputs; each run threads the remaining input through
//! nested parsers and never modifies the original text.
//!
//! ## Usage Example
//!
//! ```
//! use minixml::analyzer::parsers::element;
//! use minixml::analyzer::Parser;
//!
//! let (remaining, root) = element().parse("<div class=\"float\"/>").unwrap();
//! assert_eq!(remaining, "");
//! assert_eq!(root.name, "div");
//! ```

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
