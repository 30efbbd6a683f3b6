use crate::{
    blog::BlogIndex,
    components::{
        blog_list_page::BlogListPage, blog_post_page::BlogPostPage, contact_page::ContactPage,
        home_page::HomePage, nav_bar::NavBar, not_found::NotFound,
        notification::NotificationProvider, portfolio_page::PortfolioPage,
        project_detail_page::ProjectDetailPage,
    },
    config::PortfolioConfig,
    filter::FilterOptions,
    loader::fetch_projects,
    pattern::SharedPatternCache,
    project::Project,
};
use log::debug;
use std::{ops::Deref, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AppState {
    pub config: Rc<PortfolioConfig>,
    pub blog: Rc<BlogIndex>,
    /// `None` until the GitHub fetch has finished.
    pub projects: Option<Rc<Vec<Project>>>,
    pub filter_options: Rc<FilterOptions>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Rc<PortfolioConfig>, blog: BlogIndex) -> Self {
        Self {
            config,
            blog: Rc::new(blog),
            projects: None,
            filter_options: Rc::default(),
        }
    }

    #[must_use]
    pub fn with_projects(&self, projects: Vec<Project>) -> Self {
        Self {
            filter_options: Rc::new(FilterOptions::from_projects(&projects)),
            projects: Some(Rc::new(projects)),
            ..self.clone()
        }
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:id")]
    Project { id: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Top-level navigation entry a route belongs to.
    #[must_use]
    pub fn section(&self) -> Route {
        match self {
            Route::BlogPost { .. } => Route::Blog,
            Route::Project { .. } => Route::Portfolio,
            other => other.clone(),
        }
    }

    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <HomePage /> },
            Route::Blog => html! { <BlogListPage /> },
            Route::BlogPost { slug } => html! { <BlogPostPage {slug} /> },
            Route::Portfolio => html! { <PortfolioPage /> },
            Route::Project { id } => html! { <ProjectDetailPage {id} /> },
            Route::Contact => html! { <ContactPage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub config: Rc<PortfolioConfig>,
}

#[function_component(App)]
pub fn app(AppProps { config }: &AppProps) -> Html {
    let app_state = use_state(|| AppState::new(config.clone(), BlogIndex::embedded()));
    let pattern_cache = use_memo((), |()| SharedPatternCache::default());

    // Fetch the project list once; pages render a placeholder until then.
    {
        let app_state = app_state.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let projects = fetch_projects(&app_state.config).await;
                debug!("Loaded {} projects", projects.len());
                app_state.set(app_state.with_projects(projects));
            });
        });
    }

    html! {
        <ContextProvider<AppState> context={app_state.deref().clone()}>
            <ContextProvider<SharedPatternCache> context={pattern_cache.deref().clone()}>
                <NotificationProvider>
                    <BrowserRouter>
                        <div class="container">
                            <NavBar />
                            <main>
                                <Switch<Route> render={Route::render} />
                            </main>
                        </div>
                    </BrowserRouter>
                </NotificationProvider>
            </ContextProvider<SharedPatternCache>>
        </ContextProvider<AppState>>
    }
}
