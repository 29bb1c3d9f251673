use crate::app::Page;
use leptos::*;

#[component]
pub fn HomePage(page: RwSignal<Page>) -> impl IntoView {
    view! {
      <section class="page home">
        <div class="hero">
          <h1>"Welcome to PawHaven"</h1>
          <p>"Connecting pets with loving homes and supporting animal welfare"</p>
        </div>

        <div class="section-grid">
          <a class="section-card" on:click=move |_| page.set(Page::News)>
            <h2>"Latest News"</h2>
            <p>"Stay updated with animal news"</p>
          </a>
          <a class="section-card" on:click=move |_| page.set(Page::Adoption)>
            <h2>"Pet Adoption"</h2>
            <p>"Find your perfect companion"</p>
          </a>
          <a class="section-card" on:click=move |_| page.set(Page::Organizations)>
            <h2>"Organizations"</h2>
            <p>"Connect with animal welfare NGOs"</p>
          </a>
          <a class="section-card" on:click=move |_| page.set(Page::Reports)>
            <h2>"Reports"</h2>
            <p>"Report lost or stray animals"</p>
          </a>
        </div>

        <div class="gallery">
          <img src="https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?auto=format&fit=crop&w=800&q=80" alt="Cat portrait"/>
          <img src="https://images.unsplash.com/photo-1543466835-00a7907e9de1?auto=format&fit=crop&w=800&q=80" alt="Dog portrait"/>
          <img src="https://images.unsplash.com/photo-1495360010541-f48722b34f7d?auto=format&fit=crop&w=800&q=80" alt="Cat close-up"/>
          <img src="https://images.unsplash.com/photo-1517849845537-4d257902454a?auto=format&fit=crop&w=800&q=80" alt="Dog close-up"/>
        </div>
      </section>
    }
}
