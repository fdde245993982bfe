// Custom Mods
mod components;
mod config;
mod error;
mod logging;
mod requests;


use components::episode::EpisodePage;
use components::home::Home;
use components::player::Player;
use components::routes::Route;
use config::AppConfig;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page Not Found"}</h1>
            <Link<Route> to={Route::Home}>{"Head back home"}</Link<Route>>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Episode { slug } => html! { <EpisodePage {slug} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
struct MainProps {
    config: AppConfig,
}

#[function_component(Main)]
fn main_component(props: &MainProps) -> Html {
    html! {
        <YewduxRoot>
            <ContextProvider<AppConfig> context={props.config.clone()}>
                <BrowserRouter>
                    <div class="wrapper">
                        <main>
                            <header class="header">
                                <Link<Route> to={Route::Home}>
                                    <img src="/static/images/logo.svg" alt="Podplayer" />
                                </Link<Route>>
                            </header>
                            <Switch<Route> render={switch} />
                        </main>
                        <Player />
                    </div>
                </BrowserRouter>
            </ContextProvider<AppConfig>>
        </YewduxRoot>
    }
}

fn main() {
    let config = AppConfig::new();
    let log_level = config
        .as_ref()
        .map_or(log::LevelFilter::Info, |config| config.log_level);
    if let Err(e) = logging::init(log_level) {
        web_sys::console::error_1(&format!("Logger already initialised: {}", e).into());
    }

    let config = config.unwrap_or_else(|e| {
        log::error!("{}; falling back to defaults", e);
        AppConfig::default()
    });
    log::info!("Using episode API at {}", config.api_url);

    yew::Renderer::<Main>::with_props(MainProps { config }).render();
}
