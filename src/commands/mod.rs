pub mod add;
pub mod info;
pub mod init;
pub mod list;
