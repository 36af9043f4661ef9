//! Client-side record views
//!
//! Admin tables are loaded in full from the backend and then sorted and paged
//! in memory. Nothing here performs I/O.

pub mod compare;
pub mod page;
pub mod state;
pub mod table;

pub use compare::{compare_values, locale_compare, SortValue, Sortable};
pub use page::{get_page, sorted, total_pages, Page};
pub use state::{PageDirection, SortDirection, SortKey, ViewState};
pub use table::RecordTable;
