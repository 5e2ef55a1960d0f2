mod page_view;
mod progress_bar;
pub mod sections;
mod status_bar;
pub mod text;

pub use page_view::{document_lines, measure, PageViewWidget};
pub use progress_bar::ProgressBarWidget;
pub use sections::{icon_glyph, section_lines, RenderContext};
pub use status_bar::StatusBarWidget;
