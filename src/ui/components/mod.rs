pub mod diff_badge;
pub mod item_table;
pub mod kpi_card;
pub mod saved_list;
pub mod toast;
