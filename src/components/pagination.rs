//! Pagination Control Component
//!
//! Renders the page-marker window from [`crate::paging`] plus previous/next
//! arrows and the item-range label. Nothing renders for a single page.

use leptos::prelude::*;

use crate::models::Pagination;
use crate::paging::{item_range, page_markers, PageMarker};

#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    let range_label = move || {
        let p = pagination.get();
        let (first, last) = item_range(p.page, p.limit, p.total_count);
        format!("Showing {} to {} of {} results", first, last, p.total_count)
    };

    view! {
        <Show when=move || (pagination.get().total_pages > 1)>
            <div class="pagination">
                <p class="pagination-range">{range_label}</p>
                <nav class="pagination-nav" aria-label="Pagination">
                    <button
                        class="page-btn"
                        disabled=move || !pagination.get().has_previous_page
                        on:click=move |_| {
                            let p = pagination.get();
                            if p.page > 1 {
                                on_page_change.run(p.page - 1);
                            }
                        }
                    >
                        "‹"
                    </button>
                    {move || {
                        let p = pagination.get();
                        page_markers(p.page, p.total_pages)
                            .into_iter()
                            .map(|marker| match marker {
                                PageMarker::Ellipsis => {
                                    view! { <span class="page-ellipsis">"..."</span> }.into_any()
                                }
                                PageMarker::Page(n) => {
                                    let is_current = move || pagination.get().page == n;
                                    view! {
                                        <button
                                            class=move || {
                                                if is_current() { "page-btn active" } else { "page-btn" }
                                            }
                                            on:click=move |_| on_page_change.run(n)
                                        >
                                            {n}
                                        </button>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="page-btn"
                        disabled=move || !pagination.get().has_next_page
                        on:click=move |_| {
                            let p = pagination.get();
                            if p.page < p.total_pages {
                                on_page_change.run(p.page + 1);
                            }
                        }
                    >
                        "›"
                    </button>
                </nav>
            </div>
        </Show>
    }
}
