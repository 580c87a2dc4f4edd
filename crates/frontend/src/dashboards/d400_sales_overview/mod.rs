pub mod api;
pub mod chart;
pub mod color;
pub mod map_painter;
pub mod prefectures;
pub mod ui;
pub mod view_switcher;
