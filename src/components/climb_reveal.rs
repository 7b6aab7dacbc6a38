use super::{cliff_progress::CliffProgress, mountain_path::MountainPath};
use crate::model::{ClimbAction, ClimbState, Gift};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClimbRevealProps {
    pub gift: &'static Gift,
    pub on_reveal: Callback<()>,
}

/// Hold-to-climb reveal: pressing anywhere on the card advances progress on
/// every animation frame; releasing (or the pointer leaving) pauses it.
#[function_component(ClimbReveal)]
pub fn climb_reveal(props: &ClimbRevealProps) -> Html {
    let theme = props.gift.theme();
    let climb = use_reducer_eq(ClimbState::default);

    // Frame loop driving the progress while a hold is active. The reducer
    // ignores idle ticks, so dispatching every frame is cheap; the loop
    // itself is cancelled when the view unmounts.
    {
        let climb = climb.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let window_loop = window.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                    climb.dispatch(ClimbAction::Tick { now_ms });
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                }) as Box<dyn FnMut(f64)>));
            }
            if let Ok(id) = window.request_animation_frame(
                closure_cell.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                *raf_id.borrow_mut() = Some(id);
            }
            move || {
                if let Some(id) = raf_id.borrow_mut().take() {
                    let _ = window.cancel_animation_frame(id);
                }
                closure_cell.borrow_mut().take();
            }
        });
    }

    // Report the summit exactly when the latch flips.
    {
        let on_reveal = props.on_reveal.clone();
        use_effect_with(climb.revealed, move |revealed| {
            if *revealed {
                on_reveal.emit(());
            }
            || ()
        });
    }

    let hold_start = {
        let climb = climb.clone();
        Callback::from(move |_: PointerEvent| climb.dispatch(ClimbAction::HoldStart))
    };
    let hold_end = {
        let climb = climb.clone();
        Callback::from(move |_: PointerEvent| climb.dispatch(ClimbAction::HoldEnd))
    };

    let title = if theme.is_christmas() { "Climb to Reveal! 🎅" } else { "Hold to climb" };
    let subtitle = if theme.is_christmas() {
        "Press and hold to scale the snowy peak. Your Christmas surprise awaits at the top."
    } else {
        "Press and hold to start your ascent. Reach the peak to reveal your surprise."
    };
    let paused_midway = !climb.holding && climb.progress > 0.0 && climb.progress < 100.0;
    let hint = if theme.is_christmas() {
        "Keep climbing, Santa is waiting! 🎅"
    } else {
        "Keep holding!"
    };

    html! {
        <div style="cursor:pointer; touch-action:none;"
             onpointerdown={hold_start}
             onpointerup={hold_end.clone()}
             onpointerleave={hold_end.clone()}
             onpointercancel={hold_end}>
            <h1 style="margin:0 0 6px 0; font-size:26px; color:#0f172a;">{ title }</h1>
            <p style="margin:0 0 20px 0; color:#475569; line-height:1.5;">{ subtitle }</p>
            <MountainPath progress={climb.progress} theme={theme} avatar_image={props.gift.avatar_image} />
            <div style="margin-top:16px; display:flex; justify-content:center;">
                <CliffProgress progress={climb.progress} />
            </div>
            { if paused_midway {
                html! { <p style="margin:12px 0 0 0; color:#64748b; font-size:14px;">{ hint }</p> }
            } else { html! {} } }
        </div>
    }
}
