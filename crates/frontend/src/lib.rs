pub mod shared;

pub use contracts;
pub use shared::class_names::cn;
pub use shared::components::table::{ColumnDef, DataTable, TableCellCheckbox, TableHeaderCheckbox};
pub use shared::components::DataTablePagination;
pub use shared::selection::{use_row_selection, use_row_selection_by_identity, RowSelection};
pub use shared::theme::{expect_dark_mode, use_dark_mode, DarkMode, DarkModeProvider, DarkModeToggle};

use wasm_bindgen::prelude::wasm_bindgen;

/// Логирование в консоль и panic hook. Повторный вызов безопасен.
#[wasm_bindgen]
pub fn init_logging() {
    init_logging_with_level(log::Level::Debug);
}

pub fn init_logging_with_level(level: log::Level) {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
}
