use crate::app::{AppState, Route};
use yew::prelude::*;
use yew_router::prelude::*;

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Portfolio, "Portfolio"),
    (Route::Blog, "Blog"),
    (Route::Contact, "Contact"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let current = use_route::<Route>();

    let links = LINKS.iter().map(|(route, label)| {
        let active = current.as_ref().is_some_and(|current| current.section() == *route);
        html! {
            <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                { *label }
            </Link<Route>>
        }
    });

    html! {
        <nav class="nav-bar">
            <Link<Route> to={Route::Home} classes="nav-brand">
                { &app_state.config.site.title }
            </Link<Route>>
            <div class="nav-links">{ for links }</div>
        </nav>
    }
}
