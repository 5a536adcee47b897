mod context;

pub mod browse;
pub mod config_cmd;
pub mod post_create;
pub mod post_delete;
pub mod post_edit;
pub mod post_list;
pub mod post_show;

pub use context::HandlerContext;
