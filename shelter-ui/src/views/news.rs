use crate::bridge::RestService;
use chrono::Utc;
use leptos::*;
use shelter_core::listing::{self, Listing};
use shelter_core::query::CollectionQuery;
use shelter_core::records::{non_empty, relative_age, NewsItem};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn NewsPage() -> impl IntoView {
    let news = create_rw_signal(Listing::<NewsItem>::Pending);

    spawn_local(async move {
        let _ = news.try_set(load_news().await);
    });

    view! {
      <section class="page">
        <header class="page-header">
          <h1>"Animal News"</h1>
          <p>"Stay updated with the latest animal news and emergencies in your area"</p>
        </header>

        <Show
          when=move || !news.with(Listing::is_pending)
          fallback=|| view! { <p class="loading">"Loading news..."</p> }
        >
          <div class="card-list">
            <For
              each=move || news.with(|listing| listing.records().to_vec())
              key=|item| item.id.clone()
              children=|item: NewsItem| {
                let class = if item.emergency { "card news emergency" } else { "card news" };
                view! {
                  <article class=class>
                    <div class="card-body">
                      <h2>
                        {item.emergency.then(|| view! { <span class="warn">"⚠ "</span> })}
                        {item.title.clone()}
                      </h2>
                      <p>{item.content.clone()}</p>
                      {non_empty(&item.location).map(|location| view! {
                        <p class="meta">{format!("📍 {location}")}</p>
                      })}
                    </div>
                    <span class="meta age">{relative_age(item.created_at, Utc::now())}</span>
                  </article>
                }
              }
            />
          </div>
        </Show>
      </section>
    }
}

async fn load_news() -> Listing<NewsItem> {
    match RestService::from_env() {
        Ok(service) => listing::load(&service, CollectionQuery::news()).await,
        Err(err) => {
            log::error!("failed to load news: {err}");
            Listing::Failed(err)
        }
    }
}
