use crate::bridge::RestService;
use leptos::*;
use shelter_core::listing::{self, Listing};
use shelter_core::query::CollectionQuery;
use shelter_core::records::{non_empty, Pet};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AdoptionPage() -> impl IntoView {
    let pets = create_rw_signal(Listing::<Pet>::Pending);

    spawn_local(async move {
        // The view may have been torn down while the fetch was in flight;
        // the result is simply discarded in that case.
        let _ = pets.try_set(load_pets().await);
    });

    view! {
      <section class="page">
        <header class="page-header">
          <h1>"Pet Adoption"</h1>
          <p>"Find your perfect companion or help a pet find their forever home"</p>
        </header>

        <Show
          when=move || !pets.with(Listing::is_pending)
          fallback=|| view! { <p class="loading">"Loading pets..."</p> }
        >
          <div class="card-grid">
            <For
              each=move || pets.with(|listing| listing.records().to_vec())
              key=|pet| pet.id.clone()
              children=|pet: Pet| {
                view! {
                  <article class="card pet">
                    {non_empty(&pet.image_url).map(|url| view! {
                      <img class="photo" src=url.to_string() alt=pet.name.clone()/>
                    })}
                    <div class="card-body">
                      <h2>{pet.name.clone()}</h2>
                      <p class="field">
                        <span class="field-name">"Species: "</span>
                        {pet.species.clone()}
                      </p>
                      {non_empty(&pet.breed).map(|breed| view! {
                        <p class="field">
                          <span class="field-name">"Breed: "</span>
                          {breed.to_string()}
                        </p>
                      })}
                      {pet.age.map(|age| view! {
                        <p class="field">
                          <span class="field-name">"Age: "</span>
                          {format!("{age} years")}
                        </p>
                      })}
                      {non_empty(&pet.description).map(|description| view! {
                        <p class="description">{description.to_string()}</p>
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

async fn load_pets() -> Listing<Pet> {
    match RestService::from_env() {
        Ok(service) => listing::load(&service, CollectionQuery::pets()).await,
        Err(err) => {
            log::error!("failed to load pets: {err}");
            Listing::Failed(err)
        }
    }
}
