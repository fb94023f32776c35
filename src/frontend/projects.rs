use serde_json::json;
use std::rc::Rc;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::browser::{BodyScrollLock, BrowserScheduler};
use super::lazy_image::LazyImage;
use crate::carousel::{Carousel, Modal};
use crate::config::{CAROUSEL_NAV_THROTTLE_MS, PROJECT_VIEW_SETTLE_MS};
use crate::content::{Project, PROJECTS};
use crate::logging::{log_event, LogLevel};
use crate::rate_limit::{debounce, memoize, throttle, Memoized};

thread_local! {
    static SCREENSHOT_ALT: Memoized<(&'static str, usize), String> =
        memoize(|(title, number): &(&'static str, usize)| format!("{title} - Screenshot {number}"));
}

fn screenshot_alt(project: &Project, index: usize) -> String {
    SCREENSHOT_ALT.with(|alt| alt.call(&(project.title, index + 1)))
}

pub enum CarouselStep {
    Prev,
    Next,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselStep;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselStep::Prev => next.prev(),
            CarouselStep::Next => next.next(),
            CarouselStep::GoTo(index) if index < next.len() => next.go_to(index),
            CarouselStep::GoTo(_) => return self,
        }
        Rc::new(next)
    }
}

fn is_activation_key(event: &KeyboardEvent) -> bool {
    matches!(event.key().as_str(), "Enter" | " ")
}

fn skill_tags(skills: &[&'static str]) -> Html {
    html! {
        <ul class="skill-tags">
            { for skills.iter().map(|skill| html! { <li class="skill-tag">{*skill}</li> }) }
        </ul>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let carousel = use_reducer(|| Carousel::new(PROJECTS.len()));
    let selected = use_state(|| None::<usize>);
    let modal = use_mut_ref(|| Modal::new(Rc::new(BodyScrollLock::default())));

    let step = {
        let dispatcher = carousel.dispatcher();
        use_memo((), move |_| {
            throttle(
                move |step: CarouselStep| dispatcher.dispatch(step),
                CAROUSEL_NAV_THROTTLE_MS,
                Rc::new(BrowserScheduler),
            )
        })
    };

    let viewed = use_memo((), |_| {
        debounce(
            |index: usize| {
                log_event(
                    LogLevel::Info,
                    "projects.viewed",
                    json!({ "index": index, "title": PROJECTS[index].title }),
                )
            },
            PROJECT_VIEW_SETTLE_MS,
            Rc::new(BrowserScheduler),
        )
    });

    {
        let modal = modal.clone();
        use_effect_with((), move |_| move || modal.borrow_mut().close());
    }

    {
        let viewed = viewed.clone();
        use_effect_with(carousel.current(), move |index| {
            viewed.call(*index);
            || ()
        });
    }

    let open_details = {
        let modal = modal.clone();
        let selected = selected.clone();
        Callback::from(move |index: usize| {
            modal.borrow_mut().open();
            selected.set(Some(index));
        })
    };

    let close_details = {
        let modal = modal.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            modal.borrow_mut().close();
            selected.set(None);
        })
    };

    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.call(CarouselStep::Prev);
        })
    };

    let on_next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.call(CarouselStep::Next);
        })
    };

    let current = carousel.current();
    let project = &PROJECTS[current];

    let on_card_click = {
        let open_details = open_details.clone();
        Callback::from(move |_: MouseEvent| open_details.emit(current))
    };

    let on_card_key = {
        let open_details = open_details.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event) {
                event.prevent_default();
                open_details.emit(current);
            }
        })
    };

    html! {
        <section class="projects" aria-labelledby="projects-heading">
            <h2 id="projects-heading">{"Projects"}</h2>

            <div class="carousel">
                <button class="carousel-nav prev" type="button" aria-label="Previous project" onclick={on_prev}>
                    {"‹"}
                </button>

                <article
                    class="project-card"
                    role="button"
                    tabindex="0"
                    aria-label={format!("Open details for {}", project.title)}
                    onclick={on_card_click}
                    onkeydown={on_card_key}
                >
                    if let Some(cover) = project.images.first() {
                        <LazyImage
                            key={*cover}
                            class="project-cover"
                            src={*cover}
                            alt={screenshot_alt(project, 0)}
                        />
                    }
                    <h3>{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    { skill_tags(project.skills) }
                </article>

                <button class="carousel-nav next" type="button" aria-label="Next project" onclick={on_next}>
                    {"›"}
                </button>
            </div>

            <div class="carousel-indicators" role="tablist">
                { for (0..carousel.len()).map(|index| {
                    let step = step.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        step.call(CarouselStep::GoTo(index));
                    });
                    html! {
                        <button
                            class={classes!("indicator", (index == current).then_some("active"))}
                            type="button"
                            role="tab"
                            aria-selected={(index == current).to_string()}
                            aria-label={format!("Go to project {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>

            if let Some(index) = *selected {
                <ProjectModal project={index} on_close={close_details} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: usize,
    pub on_close: Callback<()>,
}

/// Project details, portalled into `<body>` so it sits above the page shell.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let dialog_ref = use_node_ref();

    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with((), move |_| {
            if let Some(dialog) = dialog_ref.cast::<HtmlElement>() {
                let _ = dialog.focus();
            }
            || ()
        });
    }

    let Some(project) = PROJECTS.get(props.project) else {
        return html! {};
    };
    let Some(host) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return html! {};
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            if event.target() == event.current_target() {
                on_close.emit(());
            }
        })
    };

    let on_key = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    yew::create_portal(
        html! {
            <div class="modal-backdrop" onclick={on_backdrop}>
                <div
                    ref={dialog_ref}
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="project-modal-title"
                    tabindex="-1"
                    onkeydown={on_key}
                >
                    <button class="modal-close" type="button" aria-label="Close" onclick={on_close_button}>
                        {"×"}
                    </button>
                    <h2 id="project-modal-title">{project.title}</h2>
                    <p>{project.description}</p>
                    { skill_tags(project.skills) }
                    <div class="modal-gallery">
                        { for project.images.iter().enumerate().map(|(index, src)| html! {
                            <LazyImage
                                key={*src}
                                class="modal-image"
                                src={*src}
                                alt={screenshot_alt(project, index)}
                            />
                        }) }
                    </div>
                </div>
            </div>
        },
        host.into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::testing::{document, mount_host, settle, text_of};
    use std::cell::Cell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    fn element(selector: &str) -> Option<HtmlElement> {
        document()
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into().ok())
    }

    fn press_escape(target: &HtmlElement) {
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        let _ = target.dispatch_event(&event);
    }

    fn body_overflow() -> String {
        document()
            .body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn modal_closes_on_backdrop_escape_and_button_only() {
        let host = mount_host("top: 0");
        let closes = Rc::new(Cell::new(0));
        let on_close = {
            let closes = closes.clone();
            Callback::from(move |_| closes.set(closes.get() + 1))
        };
        let app = yew::Renderer::<ProjectModal>::with_root_and_props(
            host.clone().into(),
            ProjectModalProps {
                project: 0,
                on_close,
            },
        )
        .render();
        settle(50).await;

        element("#project-modal-title").expect("modal title").click();
        assert_eq!(closes.get(), 0);

        element(".modal-backdrop").expect("backdrop").click();
        assert_eq!(closes.get(), 1);

        press_escape(&element(".modal").expect("dialog"));
        assert_eq!(closes.get(), 2);

        element(".modal-close").expect("close button").click();
        assert_eq!(closes.get(), 3);

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn rapid_next_clicks_advance_one_project() {
        let host = mount_host("top: 0");
        let app = yew::Renderer::<Projects>::with_root(host.clone().into()).render();
        settle(50).await;

        let next = element(".carousel-nav.next").expect("next button");
        next.click();
        next.click();
        settle(50).await;
        assert_eq!(
            text_of(&host, ".project-card h3").as_deref(),
            Some(PROJECTS[1].title)
        );

        settle(CAROUSEL_NAV_THROTTLE_MS).await;
        next.click();
        settle(50).await;
        assert_eq!(
            text_of(&host, ".project-card h3").as_deref(),
            Some(PROJECTS[2].title)
        );

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn opening_details_locks_scroll_until_closed() {
        let host = mount_host("top: 0");
        let app = yew::Renderer::<Projects>::with_root(host.clone().into()).render();
        settle(50).await;

        element(".project-card").expect("project card").click();
        settle(50).await;
        assert!(element(".modal").is_some());
        assert_eq!(body_overflow(), "hidden");

        press_escape(&element(".modal").expect("dialog"));
        settle(50).await;
        assert!(element(".modal").is_none());
        assert_eq!(body_overflow(), "");

        app.destroy();
        host.remove();
    }
}
