pub mod column_def;
pub mod data_table;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;

pub use column_def::{CellRenderer, ColumnDef, HeaderRenderer};
pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
