pub mod add;
pub mod config;
pub mod list;
pub mod login;
pub mod remove;
pub mod show;
pub mod update;

pub use add::handle_add;
pub use config::handle_config;
pub use list::handle_list;
pub use login::handle_login;
pub use remove::handle_remove;
pub use show::handle_show;
pub use update::handle_update;
