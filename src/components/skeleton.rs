//! Loading Skeletons
//!
//! Placeholder blocks shown while a fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn CharacterGridSkeleton(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="character-grid">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="skeleton-card">
                            <div class="skeleton-block skeleton-image"></div>
                            <div class="skeleton-block skeleton-line"></div>
                            <div class="skeleton-block skeleton-line short"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CharacterDetailSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-detail">
            <div class="skeleton-block skeleton-portrait"></div>
            <div class="skeleton-detail-body">
                <div class="skeleton-block skeleton-line wide"></div>
                <div class="skeleton-block skeleton-line"></div>
                <div class="skeleton-block skeleton-line"></div>
                <div class="skeleton-block skeleton-line short"></div>
            </div>
        </div>
    }
}
