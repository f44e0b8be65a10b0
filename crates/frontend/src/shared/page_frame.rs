//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entidad}--{categoria}"`, e.g. `"usuarios--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// HTML id in `{entidad}--{categoria}` form, e.g. `"usuarios--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=base_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
