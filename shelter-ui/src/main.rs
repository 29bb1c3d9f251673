use leptos::*;

mod app;
mod bridge;

mod views {
    pub mod adoption;
    pub mod home;
    pub mod news;
    pub mod organizations;
    pub mod reports;
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(|| view! { <app::App/> });
}
