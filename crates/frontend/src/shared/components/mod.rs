pub mod pagination_controls;
pub mod table;

pub use pagination_controls::DataTablePagination;
