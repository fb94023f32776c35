use std::rc::Rc;
use yew::prelude::*;

use super::typewriter::TypewriterText;
use crate::config::RuntimeConfig;
use crate::content::{headline_fragments, OWNER_NAME, SKILL_CATEGORIES, SOCIAL_LINKS};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub color: Option<AttrValue>,
    #[prop_or_default]
    pub new_tab: bool,
}

#[function_component(SocialLink)]
pub fn social_link(props: &SocialLinkProps) -> Html {
    let style = props
        .color
        .as_ref()
        .map(|color| format!("--link-accent: {color};"));

    html! {
        <a
            class="social-link"
            href={props.href.clone()}
            style={style}
            target={props.new_tab.then_some("_blank")}
            rel={props.new_tab.then_some("noopener noreferrer")}
        >
            {props.label.clone()}
            if props.new_tab {
                <span class="external-mark" aria-hidden="true">{"↗"}</span>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

fn social_links() -> Html {
    html! {
        <ul class="social-links">
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <li>
                    <SocialLink
                        href={link.href}
                        label={link.label}
                        color={Some(AttrValue::from(link.color))}
                        new_tab={link.new_tab}
                    />
                </li>
            }) }
        </ul>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<RuntimeConfig>().unwrap_or_default();
    let fragments = use_memo((), |_| headline_fragments());

    html! {
        <section class="home" aria-labelledby="home-heading">
            <h1 id="home-heading">{format!("Hi! I am {OWNER_NAME}")}</h1>
            <p class="headline">
                <TypewriterText
                    fragments={Rc::clone(&fragments)}
                    speed={config.home_typewriter_speed_ms}
                    delay={config.home_typewriter_delay_ms}
                    cursor={config.cursor_blink}
                />
            </p>
            <p class="intro">
                {"I build responsive web applications and the occasional IoT system, \
                  from the database up to the last pixel."}
            </p>
            { social_links() }
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section class="skills" aria-labelledby="skills-heading">
            <h2 id="skills-heading">{"Skills"}</h2>
            <div class="skill-categories">
                { for SKILL_CATEGORIES.iter().map(|category| html! {
                    <div class="skill-category">
                        <h3>{category.name}</h3>
                        <ul class="skill-tags">
                            { for category.skills.iter().map(|skill| html! {
                                <li class="skill-tag">{*skill}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section class="contact" aria-labelledby="contact-heading">
            <h2 id="contact-heading">{"Contact"}</h2>
            <p>{"Reach out through any of these:"}</p>
            { social_links() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub path: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <section class="not-found" aria-labelledby="not-found-heading">
            <h2 id="not-found-heading">{"Page not found"}</h2>
            <p>{format!("Nothing lives at {}.", props.path)}</p>
            <a href={Route::Home.to_hash()}>{"Back home"}</a>
        </section>
    }
}
