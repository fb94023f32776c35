use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserverEntry};
use yew::prelude::*;

use super::observer::{preload_resource, VisibilityOptions, VisibilityWatcher};
use crate::config::media::ERROR_TEXT;
use crate::logging::{log_event, LogLevel};
use crate::media::{MediaLoad, MediaView};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub on_load: Callback<()>,
    #[prop_or_default]
    pub on_error: Callback<()>,
}

pub enum MediaAction {
    Start { attempt: u32, priority: bool },
    Reveal,
    Finish { attempt: u32, succeeded: bool },
}

impl Reducible for MediaLoad {
    type Action = MediaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            MediaAction::Start { attempt, priority } => {
                next.restart(attempt, priority);
                true
            }
            MediaAction::Reveal => next.reveal(),
            MediaAction::Finish { attempt, succeeded } => next.finish(attempt, succeeded),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone)]
struct LoadRequest {
    src: AttrValue,
    attempt: u32,
    media: UseReducerDispatcher<MediaLoad>,
    on_load: Callback<()>,
    on_error: Callback<()>,
}

impl LoadRequest {
    fn begin(self) {
        spawn_local(async move {
            let result = preload_resource(&self.src).await;
            let succeeded = result.is_ok();
            if let Err(error) = result {
                log_event(
                    LogLevel::Warn,
                    "media.load_failed",
                    json!({ "url": self.src.as_str(), "error": error.to_string() }),
                );
            }

            self.media.dispatch(MediaAction::Finish {
                attempt: self.attempt,
                succeeded,
            });
            if succeeded {
                self.on_load.emit(());
            } else {
                self.on_error.emit(());
            }
        });
    }
}

/// Image that defers its fetch until it nears the viewport, unless `priority`.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let media = use_reducer(MediaLoad::new);
    let attempts = use_mut_ref(|| 0u32);
    let node_ref = use_node_ref();

    {
        let dispatcher = media.dispatcher();
        let node_ref = node_ref.clone();
        let on_load = props.on_load.clone();
        let on_error = props.on_error.clone();

        use_effect_with(
            (props.src.clone(), props.priority),
            move |(src, priority)| {
                let attempt = {
                    let mut attempts = attempts.borrow_mut();
                    *attempts = attempts.wrapping_add(1);
                    *attempts
                };
                dispatcher.dispatch(MediaAction::Start {
                    attempt,
                    priority: *priority,
                });

                let request = LoadRequest {
                    src: src.clone(),
                    attempt,
                    media: dispatcher.clone(),
                    on_load,
                    on_error,
                };
                let slot: Rc<RefCell<Option<VisibilityWatcher>>> = Rc::default();

                if *priority {
                    request.begin();
                } else {
                    let on_visible = {
                        let request = request.clone();
                        let slot = Rc::downgrade(&slot);
                        move |_entry: IntersectionObserverEntry| {
                            if let Some(slot) = slot.upgrade() {
                                if let Some(watcher) = slot.borrow().as_ref() {
                                    watcher.disconnect();
                                }
                            }
                            log_event(
                                LogLevel::Debug,
                                "media.visible",
                                json!({ "url": request.src.as_str() }),
                            );
                            request.media.dispatch(MediaAction::Reveal);
                            request.clone().begin();
                        }
                    };

                    match VisibilityWatcher::new(&VisibilityOptions::lazy_media(), on_visible) {
                        Ok(watcher) => {
                            if let Some(element) = node_ref.cast::<Element>() {
                                watcher.observe(&element);
                            }
                            slot.replace(Some(watcher));
                        }
                        Err(error) => {
                            log_event(
                                LogLevel::Warn,
                                "media.observer_unavailable",
                                json!({ "url": src.as_str(), "error": error.to_string() }),
                            );
                            dispatcher.dispatch(MediaAction::Reveal);
                            request.begin();
                        }
                    }
                }

                move || drop(slot)
            },
        );
    }

    let class = props.class.clone();
    let state = media.state();
    let busy = (state.visible && !state.loaded && !state.errored).to_string();
    match media.view() {
        MediaView::Placeholder => html! {
            <div ref={node_ref} class={classes!(class, "media-skeleton")} aria-busy={busy}>
                { for props.placeholder.clone().map(|src| html! {
                    <img class="media-placeholder" src={src} alt="Placeholder" />
                }) }
            </div>
        },
        MediaView::Resource { shown } => html! {
            <img
                ref={node_ref}
                class={classes!(class, "media-fade", if shown { "is-shown" } else { "is-hidden" })}
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading={if props.priority { "eager" } else { "lazy" }}
                aria-busy={busy}
            />
        },
        MediaView::Unavailable => html! {
            <div ref={node_ref} class={classes!(class, "media-unavailable")} aria-busy={busy}>
                <span>{ERROR_TEXT}</span>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::testing::{mount_host, settle, text_of, NOT_AN_IMAGE, PIXEL};
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    fn image(src: &'static str, priority: bool, on_error: Callback<()>) -> LazyImageProps {
        LazyImageProps {
            src: AttrValue::from(src),
            alt: AttrValue::from("screenshot"),
            class: Classes::new(),
            placeholder: None,
            priority,
            on_load: Callback::noop(),
            on_error,
        }
    }

    fn has(host: &Element, selector: &str) -> bool {
        matches!(host.query_selector(selector), Ok(Some(_)))
    }

    #[wasm_bindgen_test]
    async fn off_screen_image_waits_for_visibility() {
        let host = mount_host("top: 10000px");
        let app = yew::Renderer::<LazyImage>::with_root_and_props(
            host.clone().into(),
            image(PIXEL, false, Callback::noop()),
        )
        .render();
        settle(150).await;

        assert!(has(&host, ".media-skeleton"));
        assert!(!has(&host, "img"));

        let _ = host.style().set_property("top", "0");
        settle(300).await;

        assert!(!has(&host, ".media-skeleton"));
        assert!(has(&host, "img.media-fade.is-shown"));

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn priority_image_loads_without_visibility() {
        let host = mount_host("top: 10000px");
        let app = yew::Renderer::<LazyImage>::with_root_and_props(
            host.clone().into(),
            image(PIXEL, true, Callback::noop()),
        )
        .render();
        settle(200).await;

        assert!(!has(&host, ".media-skeleton"));
        assert!(has(&host, "img.media-fade.is-shown[loading=eager]"));

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn failed_load_shows_fallback_and_reports() {
        let host = mount_host("top: 0");
        let errors = Rc::new(Cell::new(0));
        let on_error = {
            let errors = errors.clone();
            Callback::from(move |_| errors.set(errors.get() + 1))
        };
        let app = yew::Renderer::<LazyImage>::with_root_and_props(
            host.clone().into(),
            image(NOT_AN_IMAGE, true, on_error),
        )
        .render();
        settle(200).await;

        assert_eq!(
            text_of(&host, ".media-unavailable").as_deref(),
            Some(ERROR_TEXT)
        );
        assert_eq!(errors.get(), 1);

        app.destroy();
        host.remove();
    }
}
