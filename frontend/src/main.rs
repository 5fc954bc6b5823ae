use yew::prelude::*;
use yew_router::prelude::*;
use time::OffsetDateTime;

mod styles;
mod config;
mod content;
mod analyze;
mod faq;
mod education;
mod quiz;
mod carousel;

use crate::{
    analyze::ScamalyzerMain,
    education::EducationPage,
    quiz::ScamQuiz,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/education")] Education,
    #[at("/quiz")] Quiz,
}

fn nav_link_classes(current: &Option<Route>, target: Route) -> Classes {
    classes!(
        "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
        "transition-colors", "duration-200", "ease-in-out",
        "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
        if *current == Some(target) {
            "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
        } else {
            ""
        }
    )
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let current_route = use_route::<Route>();

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex flex-wrap justify-center items-center gap-x-8 gap-y-2">
                <Link<Route> to={Route::Home} classes={nav_link_classes(&current_route, Route::Home)}>
                    {"Scamalyzer"}
                </Link<Route>>
                <Link<Route> to={Route::Education} classes={nav_link_classes(&current_route, Route::Education)}>
                    {"How to stay safe?"}
                </Link<Route>>
                <Link<Route> to={Route::Quiz} classes={nav_link_classes(&current_route, Route::Quiz)}>
                    {"Quiz: Can you spot the scam?"}
                </Link<Route>>
                <a href="https://github.com/mckwk/scamalyzer" target="_blank" rel="noopener noreferrer"
                    aria-label="GitHub"
                    class="text-gray-400 hover:text-blue-400 transition-colors text-sm font-medium">
                    {"GitHub"}
                </a>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = OffsetDateTime::now_utc().year();
    html! {
        <footer class="mt-8 py-6 text-center text-sm text-gray-500">
            <p>{format!("Scamalyzer © {} - Protecting you from digital deception.", year)}</p>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900 flex flex-col">
                <NavBar />
                <div class="pt-16 flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ScamalyzerMain /> },
        Route::Education => html! { <EducationPage /> },
        Route::Quiz => html! { <ScamQuiz /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
