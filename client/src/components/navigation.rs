//! Top navigation bar with a collapsible mobile menu.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portfolio::content::{HOME_PATH, NAV_ITEMS, is_active};

/// CSS class for a nav link given the current `pathname`.
pub fn nav_link_class(pathname: &str, href: &str) -> &'static str {
    if is_active(pathname, href) { "nav__link nav__link--active" } else { "nav__link" }
}

/// CSS class for the collapsible link list.
pub fn menu_class(open: bool) -> &'static str {
    if open { "nav__links nav__links--open" } else { "nav__links" }
}

/// Site-wide navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="nav">
            <a href=HOME_PATH class="nav__brand">"Portfolio"</a>
            <button
                class="nav__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class=move || menu_class(menu_open.get())>
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=move || pathname.with(|p| nav_link_class(p, href))
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
