//! Not found page component
//!
//! A 404 page for any path other than the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-content">
                <div class="not-found-icon">
                    <Icon name=icons::LEAF class="icon-large"/>
                </div>

                <h1>"404"</h1>
                <h2>"This page hasn't sprouted yet"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                <A href="/" attr:class="btn btn-primary">
                    "Back to PlantGift"
                </A>
            </div>
        </div>
    }
}
