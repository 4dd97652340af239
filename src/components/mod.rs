//! UI Components
//!
//! Reusable Leptos components.

mod add_restaurant_modal;
mod edit_profile_modal;
mod edit_restaurant_modal;
mod home_page;
mod image_upload_modal;
mod login_modal;
mod modal;
mod nav_bar;
mod notice_host;
mod owner_restaurant_card;
mod pagination;
mod profile_page;
mod register_modal;
mod restaurant_card;
mod restaurant_detail;
mod restaurant_grid;
mod search_bar;

pub use add_restaurant_modal::AddRestaurantModal;
pub use edit_profile_modal::EditProfileModal;
pub use edit_restaurant_modal::EditRestaurantModal;
pub use home_page::HomePage;
pub use image_upload_modal::ImageUploadModal;
pub use login_modal::LoginModal;
pub use modal::Modal;
pub use nav_bar::NavBar;
pub use notice_host::NoticeHost;
pub use owner_restaurant_card::OwnerRestaurantCard;
pub use pagination::PaginationControls;
pub use profile_page::ProfilePage;
pub use register_modal::RegisterModal;
pub use restaurant_card::RestaurantCard;
pub use restaurant_detail::RestaurantDetailModal;
pub use restaurant_grid::RestaurantGrid;
pub use search_bar::SearchBar;
