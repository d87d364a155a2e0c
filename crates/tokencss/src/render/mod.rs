//! Stylesheet rendering through MiniJinja templates.
//!
//! [`Renderer`] wraps generated declarations in a selector block. The default
//! template produces:
//!
//! ```css
//! :root {
//!   /* Dark theme variables */
//!   --color-bg: #000;
//! }
//! ```
//!
//! A custom template can change the layout (media queries, attribute
//! selectors, extra comments) without touching resolution.

mod error;
mod filters;
mod renderer;

pub use error::RenderError;
pub use renderer::{render_stylesheet, Renderer, DEFAULT_TEMPLATE};
