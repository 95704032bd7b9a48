pub mod buy_panel;
pub mod description;
pub mod gallery;
pub mod lightbox;
pub mod page_header;
pub mod price_tag;
pub mod variant_picker;
