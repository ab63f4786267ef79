pub mod header;
pub mod notice_banner;
pub mod photo_uploader;
pub mod photo_gallery;
pub mod order_summary;
