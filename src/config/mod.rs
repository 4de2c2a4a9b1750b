pub mod categories;
pub mod settings;

pub use categories::{get_categories, rank_column_for, CategoryConfig};
pub use settings::AppConfig;
