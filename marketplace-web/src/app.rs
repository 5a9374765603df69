//! Root application component.

use leptos::prelude::*;

use crate::components::{AddProductModal, Navbar, ProductList};
use crate::state::products::provide_products_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_products_context();

    view! {
        <div class="app-container">
            <Navbar/>
            <main class="page">
                <AddProductModal/>
                <ProductList/>
            </main>
        </div>
    }
}
