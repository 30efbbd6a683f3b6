pub mod blog_list_page;
pub mod blog_post_page;
pub mod code_block;
pub mod contact_page;
pub mod filter_bar;
pub mod geometric_icon;
pub mod home_page;
pub mod nav_bar;
pub mod not_found;
pub mod notification;
pub mod page_meta;
pub mod portfolio_page;
pub mod project_card;
pub mod project_detail_page;
