#[path = "config/user.rs"]
pub mod user;

pub const CONFIG_DIR_NAME: &str = "segbar";
pub const CONFIG_FILE_NAME: &str = "config.toml";
