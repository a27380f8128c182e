use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"LibroVault · Your library, everywhere."</p>
            <nav class="footer__links">
                <a href="/about">"About Us"</a>
            </nav>
        </footer>
    }
}
