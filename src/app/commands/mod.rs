pub mod guide;
pub mod hashtags;
