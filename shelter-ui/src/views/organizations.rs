use crate::bridge::RestService;
use leptos::*;
use shelter_core::listing::{self, Listing};
use shelter_core::query::CollectionQuery;
use shelter_core::records::{non_empty, Organization};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let organizations = create_rw_signal(Listing::<Organization>::Pending);

    spawn_local(async move {
        let _ = organizations.try_set(load_organizations().await);
    });

    view! {
      <section class="page">
        <header class="page-header">
          <h1>"Animal Welfare Organizations"</h1>
          <p>"Connect with trusted organizations working for animal welfare"</p>
        </header>

        <Show
          when=move || !organizations.with(Listing::is_pending)
          fallback=|| view! { <p class="loading">"Loading organizations..."</p> }
        >
          <div class="card-list">
            <For
              each=move || organizations.with(|listing| listing.records().to_vec())
              key=|org| org.id.clone()
              children=|org: Organization| {
                view! {
                  <article class="card organization">
                    <div class="card-body">
                      <h2>
                        {org.name.clone()}
                        {org.verified.then(|| view! { <span class="verified" title="Verified">" ✔"</span> })}
                      </h2>
                      <p>{org.description.clone()}</p>
                      {non_empty(&org.contact).map(|contact| view! {
                        <p class="meta">{format!("📞 {contact}")}</p>
                      })}
                      {non_empty(&org.address).map(|address| view! {
                        <p class="meta">{format!("📍 {address}")}</p>
                      })}
                      {non_empty(&org.website).map(|website| view! {
                        <a class="website" href=website.to_string() target="_blank" rel="noopener noreferrer">
                          "🌐 Visit Website"
                        </a>
                      })}
                    </div>
                  </article>
                }
              }
            />
          </div>
        </Show>
      </section>
    }
}

async fn load_organizations() -> Listing<Organization> {
    match RestService::from_env() {
        Ok(service) => listing::load(&service, CollectionQuery::organizations()).await,
        Err(err) => {
            log::error!("failed to load organizations: {err}");
            Listing::Failed(err)
        }
    }
}
