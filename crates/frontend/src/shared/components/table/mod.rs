pub mod data_table;
pub mod table_cell_money;

pub use data_table::DataTable;
pub use table_cell_money::TableCellMoney;
