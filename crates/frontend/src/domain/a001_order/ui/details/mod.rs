mod model;
mod page;
mod record_list;
mod state;
mod summary;
mod tabs;
mod view;
mod view_model;

pub use page::OrderDetailsPage;
