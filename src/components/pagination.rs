//! Pagination Component
//!
//! Windowed page numbers with ellipses plus prev/next controls.

use leptos::prelude::*;

const MAX_VISIBLE: u32 = 5;

/// Page buttons to display: first and last always, a window around the
/// current page, `None` where a gap collapses into an ellipsis.
pub fn page_window(current: u32, total: u32) -> Vec<Option<u32>> {
    if total <= MAX_VISIBLE {
        return (1..=total).map(Some).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 3 {
        end = 4;
    } else if current >= total - 2 {
        start = total - 3;
    }

    let mut pages = vec![Some(1)];
    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total - 1 {
        pages.push(None);
    }
    pages.push(Some(total));
    pages
}

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="page-step"
                    disabled=move || current_page.get() <= 1
                    aria-label="Previous page"
                    on:click=move |_| on_page.run(current_page.get().saturating_sub(1).max(1))
                >
                    "\u{2039}"
                </button>

                {move || {
                    page_window(current_page.get(), total_pages.get())
                        .into_iter()
                        .map(|slot| match slot {
                            Some(page) => {
                                let class = if page == current_page.get() {
                                    "page-number current"
                                } else {
                                    "page-number"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_page.run(page)>
                                        {page}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! { <span class="page-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="page-step"
                    disabled=move || current_page.get() >= total_pages.get()
                    aria-label="Next page"
                    on:click=move |_| on_page.run((current_page.get() + 1).min(total_pages.get()))
                >
                    "\u{203a}"
                </button>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(current: u32, total: u32) -> Vec<Option<u32>> {
        page_window(current, total)
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(pages(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(pages(2, 5), (1..=5).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_pages_shows_nothing() {
        assert!(pages(1, 0).is_empty());
    }

    #[test]
    fn test_window_at_the_start() {
        assert_eq!(
            pages(1, 10),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            pages(5, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn test_window_at_the_end() {
        assert_eq!(
            pages(10, 10),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_first_and_last_always_present() {
        for current in 1..=42 {
            let window = pages(current, 42);
            assert_eq!(window.first(), Some(&Some(1)));
            assert_eq!(window.last(), Some(&Some(42)));
            assert!(window.contains(&Some(current)), "page {current} missing");
        }
    }
}
