pub mod rain_on_grid;
pub mod r#trait;
