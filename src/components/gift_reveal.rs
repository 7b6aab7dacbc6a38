use super::{
    climb_reveal::ClimbReveal, confetti_burst::ConfettiBurst, reveal_balloons::RevealBalloons,
    reveal_scratch::RevealScratch, reveal_unwrap::RevealUnwrap,
};
use crate::model::{COMPLETION_DELAY_MS, Gift, RevealKind};
use crate::state::completion::CompletionGate;
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GiftRevealProps {
    pub gift: &'static Gift,
    pub on_complete: Callback<()>,
}

/// The reveal shell: picks the gift's mechanic, and owns the one-shot
/// completion gate. Whatever mechanic reports in, the first report mounts
/// the confetti burst and schedules the page handover; later reports are
/// ignored.
#[function_component(GiftReveal)]
pub fn gift_reveal(props: &GiftRevealProps) -> Html {
    let gift = props.gift;
    let theme = gift.theme();
    let gate = use_mut_ref(CompletionGate::default);
    let celebrating = use_state(|| false);
    let delay_timer = use_mut_ref(|| None::<(i32, Closure<dyn FnMut()>)>);

    let on_reveal = {
        let gate = gate.clone();
        let celebrating = celebrating.clone();
        let delay_timer = delay_timer.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            if !gate.borrow().try_fire() {
                return;
            }
            clog("reveal complete; scheduling voucher handover");
            celebrating.set(true);
            let Some(window) = web_sys::window() else { return };
            let cb = {
                let on_complete = on_complete.clone();
                Closure::wrap(Box::new(move || on_complete.emit(())) as Box<dyn FnMut()>)
            };
            // Let the confetti land before the voucher takes over.
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                COMPLETION_DELAY_MS,
            ) {
                *delay_timer.borrow_mut() = Some((id, cb));
            }
        })
    };

    // Tearing the reveal down must also stop the pending handover so it
    // never fires into a disposed view.
    {
        let delay_timer = delay_timer.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some((id, cb)) = delay_timer.borrow_mut().take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_timeout_with_handle(id);
                    }
                    drop(cb);
                }
            }
        });
    }

    let eyebrow = if theme.is_christmas() {
        format!("🎄 A Christmas Gift for {}", gift.recipient_name)
    } else {
        format!("A gift for {}", gift.recipient_name)
    };

    let mechanic = match gift.reveal_kind() {
        RevealKind::Climb => html! { <ClimbReveal gift={gift} on_reveal={on_reveal.clone()} /> },
        RevealKind::Scratch => {
            html! { <RevealScratch theme={theme} on_reveal={on_reveal.clone()} /> }
        }
        RevealKind::Unwrap => html! { <RevealUnwrap theme={theme} on_reveal={on_reveal.clone()} /> },
        RevealKind::Balloons => {
            html! { <RevealBalloons theme={theme} on_reveal={on_reveal.clone()} /> }
        }
    };

    html! {
        <div style="background:#fff; border-radius:20px; box-shadow:0 16px 40px rgba(15,23,42,0.14); max-width:560px; width:100%; padding:32px; text-align:center; user-select:none;">
            <p style="margin:0 0 4px 0; font-size:13px; letter-spacing:1.5px; text-transform:uppercase; color:#64748b;">
                { eyebrow }
            </p>
            { mechanic }
            { if *celebrating { html! { <ConfettiBurst theme={theme} /> } } else { html! {} } }
        </div>
    }
}
