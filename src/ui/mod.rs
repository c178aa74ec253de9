pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, info, section, success};
pub use table::{questions_table, stats_table};
pub use theme::{Theme, theme};
