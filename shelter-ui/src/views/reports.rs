use crate::bridge::{self, RestService};
use leptos::*;
use shelter_core::listing::{self, Listing};
use shelter_core::query::CollectionQuery;
use shelter_core::records::{non_empty, Report, ReportKind};
use shelter_core::submission::{self, ReportDraft, ReportForm};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let reports = create_rw_signal(Listing::<Report>::Pending);
    let form = create_rw_signal(ReportForm::new());

    let load_reports = move || {
        spawn_local(async move {
            // Discarded if the view went away while the fetch was in flight.
            let _ = reports.try_set(fetch_reports().await);
        });
    };
    load_reports();

    let pick_image = move |ev: ev::Event| {
        let Some(file) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        spawn_local(async move {
            match bridge::read_attachment(file).await {
                Ok(attachment) => {
                    let _ = form.try_update(|f| f.image = Some(attachment));
                }
                Err(err) => log::error!("failed to read photo: {err}"),
            }
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // A second click while a submission is in flight claims nothing
        // and issues nothing.
        let mut claimed = false;
        form.update(|f| claimed = f.begin_submit());
        if !claimed {
            return;
        }

        let draft = form.with_untracked(ReportForm::draft);
        spawn_local(async move {
            let succeeded = submit_draft(draft).await;
            let _ = form.try_update(|f| f.finish_submit(succeeded));
            if succeeded {
                load_reports();
            }
        });
    };

    view! {
      <section class="page">
        <header class="page-header">
          <h1>"Report Lost or Stray Animals"</h1>
          <p>"Help us reunite lost pets with their families or rescue strays in need"</p>
        </header>

        <Show
          when=move || !reports.with(Listing::is_pending)
          fallback=|| view! { <p class="loading">"Loading reports..."</p> }
        >
          <div class="card form-card">
            <h2>"Submit a Report"</h2>
            <form on:submit=on_submit>
              <div class="form-grid">
                <div class="form-field">
                  <label>"Report Type"</label>
                  <select
                    prop:value=move || kind_value(form.with(|f| f.kind)).to_string()
                    on:change=move |ev| form.update(|f| f.kind = parse_kind(&event_target_value(&ev)))
                    required=true
                  >
                    <option value="lost">"Lost Pet"</option>
                    <option value="stray">"Stray Animal"</option>
                  </select>
                </div>

                <Show when=move || form.with(|f| f.kind == ReportKind::Lost) fallback=|| ()>
                  <div class="form-field">
                    <label>"Pet's Name"</label>
                    <input
                      type="text"
                      prop:value=move || form.with(|f| f.pet_name.clone())
                      on:input=move |ev| form.update(|f| f.pet_name = event_target_value(&ev))
                    />
                  </div>
                </Show>

                <div class="form-field">
                  <label>"Species"</label>
                  <input
                    type="text"
                    placeholder="e.g., Dog, Cat"
                    prop:value=move || form.with(|f| f.species.clone())
                    on:input=move |ev| form.update(|f| f.species = event_target_value(&ev))
                    required=true
                  />
                </div>

                <div class="form-field">
                  <label>"Location Last Seen"</label>
                  <input
                    type="text"
                    prop:value=move || form.with(|f| f.location.clone())
                    on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    required=true
                  />
                </div>

                <div class="form-field">
                  <label>"Date Last Seen"</label>
                  <input
                    type="date"
                    prop:value=move || form.with(|f| f.last_seen.clone())
                    on:input=move |ev| form.update(|f| f.last_seen = event_target_value(&ev))
                    required=true
                  />
                </div>

                <div class="form-field">
                  <label>"Contact Information"</label>
                  <input
                    type="text"
                    placeholder="Phone number or email"
                    prop:value=move || form.with(|f| f.contact.clone())
                    on:input=move |ev| form.update(|f| f.contact = event_target_value(&ev))
                    required=true
                  />
                </div>
              </div>

              <div class="form-field">
                <label>"Description"</label>
                <textarea
                  rows="3"
                  prop:value=move || form.with(|f| f.description.clone())
                  on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                  required=true
                ></textarea>
              </div>

              <div class="form-field">
                <label>"Photo"</label>
                <input type="file" accept="image/*" on:change=pick_image/>
                {move || form.with(|f| f.image.as_ref().map(|image| view! {
                  <p class="meta">{format!("Attached: {}", image.file_name)}</p>
                }))}
              </div>

              <button type="submit" disabled=move || form.with(ReportForm::submitting)>
                {move || if form.with(ReportForm::submitting) { "Submitting..." } else { "Submit Report" }}
              </button>
            </form>
          </div>

          <h2 class="list-title">"Recent Reports"</h2>
          <div class="card-list">
            <For
              each=move || reports.with(|listing| listing.records().to_vec())
              key=|report| report.id.clone()
              children=|report: Report| {
                let class = match report.kind {
                    ReportKind::Lost => "card report lost",
                    ReportKind::Stray => "card report stray",
                };
                view! {
                  <article class=class>
                    <div class="card-body">
                      <h3>
                        <span class="warn">"⚠ "</span>
                        {report.headline()}
                      </h3>
                      <p>{report.description.clone()}</p>
                      <p class="meta">
                        {format!(
                            "📍 Last seen at {} on {}",
                            report.location,
                            report.last_seen.format("%b %e, %Y"),
                        )}
                      </p>
                      <p class="meta">{format!("📞 Contact: {}", report.contact)}</p>
                    </div>
                    {non_empty(&report.image_url).map(|url| view! {
                      <img class="thumb" src=url.to_string() alt="Reported animal"/>
                    })}
                  </article>
                }
              }
            />
          </div>
        </Show>
      </section>
    }
}

fn kind_value(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Lost => "lost",
        ReportKind::Stray => "stray",
    }
}

fn parse_kind(value: &str) -> ReportKind {
    match value {
        "stray" => ReportKind::Stray,
        _ => ReportKind::Lost,
    }
}

async fn fetch_reports() -> Listing<Report> {
    match RestService::from_env() {
        Ok(service) => listing::load(&service, CollectionQuery::reports()).await,
        Err(err) => {
            log::error!("failed to load reports: {err}");
            Listing::Failed(err)
        }
    }
}

async fn submit_draft(draft: ReportDraft) -> bool {
    let service = match RestService::from_env() {
        Ok(service) => service,
        Err(err) => {
            log::error!("failed to submit report: {err}");
            return false;
        }
    };
    match submission::submit(&service, &draft).await {
        Ok(()) => true,
        Err(err) => {
            log::error!("failed to submit report: {err}");
            false
        }
    }
}
