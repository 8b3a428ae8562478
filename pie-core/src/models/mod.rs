mod category;
mod render_state;
mod snapshot;

pub use category::{ExpenseCategory, LegendCaptions};
pub use render_state::RenderState;
pub use snapshot::ExpenseSnapshot;
