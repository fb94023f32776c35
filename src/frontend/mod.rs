mod browser;
mod lazy_image;
mod observer;
mod pages;
mod projects;
mod typewriter;

#[cfg(test)]
mod testing;

use serde_json::json;
use std::rc::Rc;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::RuntimeConfig;
use crate::content::OWNER_NAME;
use crate::logging::{self, log_event, measure, LogLevel};
use crate::routes::{Route, ROUTE_ORDER};
use crate::transition::{TransitionView, Transitioner};
use browser::{current_route, load_runtime_config, location_hash, BrowserScheduler, HashListener};
use pages::{Contact, Home, NotFound, Skills};
use projects::Projects;

fn page_for(route: &Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Projects => html! { <Projects /> },
        Route::Skills => html! { <Skills /> },
        Route::Contact => html! { <Contact /> },
        Route::Unknown(path) => html! { <NotFound path={path.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: RuntimeConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let view = use_state(|| TransitionView::idle(current_route()));

    let transitioner = {
        let setter = view.setter();
        let initial = view.displayed.clone();
        use_memo((), move |_| {
            Transitioner::new(initial, Rc::new(BrowserScheduler), move |next| {
                setter.set(next)
            })
        })
    };

    {
        let transitioner = transitioner.clone();
        use_effect_with((), move |_| {
            let listener = HashListener::new(move || transitioner.follow_hash(&location_hash()));
            if listener.is_none() {
                log_event(LogLevel::Warn, "route.listener_unavailable", json!({}));
            }
            move || drop(listener)
        });
    }

    let main_ref = use_node_ref();
    let skip_to_content = {
        let main_ref = main_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(main) = main_ref.cast::<HtmlElement>() {
                let _ = main.focus();
            }
        })
    };

    let highlighted = view.pending.as_ref().unwrap_or(&view.displayed);

    html! {
        <ContextProvider<RuntimeConfig> context={props.config.clone()}>
            <a class="skip-link" href="#content" onclick={skip_to_content}>{"Skip to main content"}</a>
            <div class="page-shell">
                <header class="site-header">
                    <span class="site-name">{OWNER_NAME}</span>
                    <nav aria-label="Primary">
                        <ul class="nav-list">
                            { for ROUTE_ORDER.iter().map(|route| {
                                let active = route == highlighted;
                                html! {
                                    <li>
                                        <a
                                            class={classes!("nav-link", active.then_some("active"))}
                                            href={route.to_hash()}
                                            aria-current={active.then_some("page")}
                                        >
                                            {route.label().to_string()}
                                        </a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </nav>
                </header>

                <main id="content" ref={main_ref} tabindex="-1" class={classes!(view.container_classes())}>
                    { page_for(&view.displayed) }
                </main>
            </div>
        </ContextProvider<RuntimeConfig>>
    }
}

pub fn run() {
    let config = load_runtime_config();
    logging::set_level(config.log_level);
    log_event(
        LogLevel::Info,
        "app.start",
        json!({
            "route": current_route().path(),
            "log_level": config.log_level.as_str(),
            "cursor_blink": config.cursor_blink,
        }),
    );

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    measure("app.mount", || {
        yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::{document, mount_host, settle};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn skip_link_focuses_content_without_leaving_page() {
        let host = mount_host("top: 0");
        let app = yew::Renderer::<App>::with_root_and_props(
            host.clone().into(),
            AppProps {
                config: RuntimeConfig::default(),
            },
        )
        .render();
        settle(50).await;
        let hash_before = location_hash();

        let skip: HtmlElement = host
            .query_selector(".skip-link")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into().ok())
            .expect("skip link");
        skip.click();
        settle(400).await;

        assert_eq!(location_hash(), hash_before);
        assert!(matches!(host.query_selector("#home-heading"), Ok(Some(_))));
        let focused = document().active_element().map(|element| element.id());
        assert_eq!(focused.as_deref(), Some("content"));

        app.destroy();
        host.remove();
    }
}
