use crate::{app::Route, components::page_meta::PageMeta};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <PageMeta title={AttrValue::from("Page Not Found")} />
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </section>
    }
}
