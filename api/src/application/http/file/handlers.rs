pub mod delete_file;
pub mod get_file;
pub mod list_files;
pub mod upload_asset;
pub mod upload_base64;
pub mod upload_file;
