//! # Indent Rainbow Core
//!
//! Color-coded indentation guides for source text shown in a read-only viewer.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     │
//!     ├──> Line Splitting (\r\n, \r, \n)
//!     │
//!     ├──> Indent Level Resolver
//!     │    ├─> Content lines: leading whitespace width (tab stops expanded)
//!     │    └─> Blank lines: inferred from nearest content lines above/below
//!     │
//!     ├──> Guide Layout Classifier
//!     │    ├─> Comment lines rounded up to the indent unit
//!     │    ├─> Consistent / Malformed / Mixed verdict
//!     │    └─> Colored segments + plain markers, in columns
//!     │
//!     └──> Pixel Geometry (optional, for painters)
//! ```
//!
//! The indent unit, tab width, comment flags and palette are inputs: this
//! crate does no indentation sniffing and no syntax analysis.
//!
//! ## Example
//!
//! ```rust
//! use indent_rainbow_core::{GuideLayout, IndentUnit, LineClassification, PaletteConfig};
//!
//! let layout = GuideLayout::new(IndentUnit::spaces(2), 2, PaletteConfig::default()).unwrap();
//! let lines = ["if x:", "    y = 1", "", "    z = 2"];
//!
//! let guides = layout.layout_lines(&lines, &[false; 4]).unwrap();
//! let levels: Vec<usize> = guides.iter().map(|g| g.level).collect();
//! assert_eq!(levels, vec![0, 4, 4, 4]);
//! assert_eq!(guides[1].classification, LineClassification::Consistent);
//! ```

mod classifier;
mod config;
mod error;
mod geometry;
mod layout;
mod lines;
mod resolver;
mod types;

pub use classifier::classify_lines;
pub use config::PaletteConfig;
pub use error::{GuideError, Result};
pub use geometry::{LayoutMetrics, PixelRect, MARKER_WIDTH_PX};
pub use layout::GuideLayout;
pub use lines::split_lines;
pub use resolver::{resolve_indent_levels, MAX_TAB_WIDTH};
pub use types::{
    ColorRole, GuideMarker, GuideSegment, IndentKind, IndentUnit, LineClassification, LineGuides,
};
