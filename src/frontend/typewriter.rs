use std::rc::Rc;
use yew::prelude::*;

use super::browser::BrowserScheduler;
use crate::config::typewriter::{DEFAULT_DELAY_MS, DEFAULT_SPEED_MS};
use crate::typewriter::{reveal, CursorBlink, Fragment, Frame, Timing, TypewriterDriver};

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub fragments: Rc<Vec<Fragment>>,
    #[prop_or(DEFAULT_SPEED_MS)]
    pub speed: u32,
    #[prop_or(DEFAULT_DELAY_MS)]
    pub delay: u32,
    #[prop_or(true)]
    pub cursor: bool,
    #[prop_or(true)]
    pub looping: bool,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let frame = use_state(Frame::default);
    let caret_on = use_state(|| true);

    {
        let frame = frame.clone();
        let timing = Timing {
            speed_ms: props.speed,
            delay_ms: props.delay,
            looping: props.looping,
        };
        use_effect_with(
            (props.fragments.clone(), timing),
            move |(fragments, timing)| {
                frame.set(Frame::default());
                let setter = frame.setter();
                let driver = TypewriterDriver::start(
                    fragments,
                    *timing,
                    Rc::new(BrowserScheduler),
                    move |next| setter.set(next),
                );
                move || drop(driver)
            },
        );
    }

    {
        let caret_on = caret_on.clone();
        use_effect_with(props.cursor, move |cursor| {
            caret_on.set(true);
            let blink = cursor.then(|| {
                let setter = caret_on.setter();
                CursorBlink::start(&BrowserScheduler, move |on| setter.set(on))
            });
            move || drop(blink)
        });
    }

    let pieces = props
        .fragments
        .get(frame.fragment_index)
        .map(|fragment| reveal(fragment, frame.shown))
        .unwrap_or_default();

    html! {
        <span class="typewriter">
            { for pieces.into_iter().map(|piece| match piece.style {
                Some(style) => html! { <span class={style.to_string()}>{ piece.text.to_string() }</span> },
                None => html! { <>{ piece.text.to_string() }</> },
            }) }
            if props.cursor && *caret_on {
                <span class="typewriter-caret" aria-hidden="true">{"|"}</span>
            }
        </span>
    }
}
