pub mod nav;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use sidebar::Sidebar;
use top_header::TopHeader;

/// Layout chrome state shared between the header and the sidebar.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_abierto: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_abierto: RwSignal::new(true),
        }
    }

    pub fn alternar_sidebar(&self) {
        self.sidebar_abierto.update(|v| *v = !*v);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                TopHeader                 |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = LayoutContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.sidebar_abierto.get()
                >
                    <Sidebar />
                </aside>

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
