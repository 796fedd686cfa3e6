// Render module split into focused submodules: styles, label cutting and
// one module per screen region. Sizing and joining are left to lipgloss.

pub mod bars;
pub mod full;
pub mod list;
pub mod panes;
pub mod styles;
pub mod util;

pub use full::render_full;
pub use styles::Styles;
