//! Home Page Component
//!
//! Public landing page: hero with the search bar, then the restaurant grid.

use leptos::prelude::*;

use crate::components::{RestaurantGrid, SearchBar};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Find Your Next Favorite Restaurant"</h1>
                <p>"Browse local restaurants, menus, and opening hours"</p>
                <SearchBar />
            </header>
            <RestaurantGrid />
        </div>
    }
}
