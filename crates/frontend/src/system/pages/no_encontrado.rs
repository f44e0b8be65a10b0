use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NoEncontrado() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <A href="/">"Volver al inicio"</A>
        </div>
    }
}
