use crate::views::adoption::AdoptionPage;
use crate::views::home::HomePage;
use crate::views::news::NewsPage;
use crate::views::organizations::OrganizationsPage;
use crate::views::reports::ReportsPage;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    News,
    Adoption,
    Organizations,
    Reports,
}

#[component]
pub fn App() -> impl IntoView {
    let page = create_rw_signal(Page::Home);

    view! {
      <div class="site">
        <Navbar page=page/>
        <main class="content">
          {move || match page.get() {
              Page::Home => view! { <HomePage page=page/> }.into_view(),
              Page::News => view! { <NewsPage/> }.into_view(),
              Page::Adoption => view! { <AdoptionPage/> }.into_view(),
              Page::Organizations => view! { <OrganizationsPage/> }.into_view(),
              Page::Reports => view! { <ReportsPage/> }.into_view(),
          }}
        </main>
      </div>
    }
}

#[component]
fn Navbar(page: RwSignal<Page>) -> impl IntoView {
    view! {
      <nav class="navbar">
        <a class="brand" on:click=move |_| page.set(Page::Home)>
          <span class="paw">"🐾"</span>
          " PawHaven"
        </a>
        <div class="links">
          <a on:click=move |_| page.set(Page::News)>"News"</a>
          <a on:click=move |_| page.set(Page::Adoption)>"Adoption"</a>
          <a on:click=move |_| page.set(Page::Organizations)>"Organizations"</a>
          <a on:click=move |_| page.set(Page::Reports)>"Reports"</a>
        </div>
      </nav>
    }
}
