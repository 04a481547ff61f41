use yew::prelude::*;

mod components;
pub mod api_client;
pub mod dom;
pub mod plot;
pub mod settings;

use components::predict_panel::PredictPanel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="container mx-auto p-6 flex flex-col gap-6">
            <h1 class="text-2xl font-bold">{"Wave Height Prediction"}</h1>
            <p class="text-sm text-gray-500">
                {"Next-step significant wave height predicted from the latest buoy observations."}
            </p>
            <PredictPanel />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Wavecast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction URL: {}", settings.predict_url());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
