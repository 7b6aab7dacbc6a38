use crate::model::{BALLOON_COUNT, BALLOON_SETTLE_MS, BalloonAction, BalloonField, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealBalloonsProps {
    pub theme: Theme,
    pub on_reveal: Callback<()>,
}

/// Balloon-pop reveal: a scattered field of balloons, each removed by
/// identity on click. Completion reports after a short settling pause once
/// the field is empty.
#[function_component(RevealBalloons)]
pub fn reveal_balloons(props: &RevealBalloonsProps) -> Html {
    let theme = props.theme;
    let field =
        use_reducer_eq(move || BalloonField::scatter(BALLOON_COUNT, theme, js_sys::Math::random));
    let settle_timer = use_mut_ref(|| None::<(i32, Closure<dyn FnMut()>)>);

    {
        let on_reveal = props.on_reveal.clone();
        let settle_timer = settle_timer.clone();
        use_effect_with(field.remaining(), move |remaining| {
            if *remaining == 0 && settle_timer.borrow().is_none() {
                if let Some(window) = web_sys::window() {
                    let cb = Closure::wrap(Box::new(move || on_reveal.emit(())) as Box<dyn FnMut()>);
                    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        BALLOON_SETTLE_MS,
                    ) {
                        *settle_timer.borrow_mut() = Some((id, cb));
                    }
                }
            }
            || ()
        });
    }

    // The settling timer must not outlive the view.
    {
        let settle_timer = settle_timer.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some((id, cb)) = settle_timer.borrow_mut().take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_timeout_with_handle(id);
                    }
                    drop(cb);
                }
            }
        });
    }

    html! {
        <div>
            <h1 style="margin:0 0 6px 0; font-size:26px; color:#0f172a;">{"Pop to reveal"}</h1>
            <p style="margin:0 0 20px 0; color:#475569; line-height:1.5;">
                {"Burst every balloon to uncover your surprise."}
            </p>
            <style>
                {"@keyframes balloon-bob { 0%, 100% { margin-top:0; } 50% { margin-top:-10px; } }"}
            </style>
            <div style="position:relative; width:100%; height:350px; overflow:hidden; border-radius:16px; background:rgba(255,255,255,0.5); border:1px solid #e2e8f0;">
                <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; z-index:0;">
                    <h2 style="opacity:0.3; color:#0f172a;">{"Pop them all!"}</h2>
                </div>
                { for field.balloons.iter().map(|balloon| {
                    let id = balloon.id;
                    let pop = {
                        let field = field.clone();
                        Callback::from(move |_: MouseEvent| field.dispatch(BalloonAction::Pop { id }))
                    };
                    let style = format!(
                        "position:absolute; left:{}%; top:{}%; width:{}px; height:{}px; \
                         background-color:{}; border-radius:50% 50% 50% 50% / 60% 60% 40% 40%; \
                         cursor:pointer; display:flex; align-items:center; justify-content:center; \
                         box-shadow:inset -5px -5px 10px rgba(0,0,0,0.1), 2px 5px 10px rgba(0,0,0,0.1); \
                         z-index:10; animation:balloon-bob 2.4s ease-in-out infinite; \
                         animation-delay:{:.2}s;",
                        balloon.x,
                        balloon.y,
                        balloon.size,
                        balloon.size * 1.2,
                        balloon.color,
                        balloon.delay,
                    );
                    html! {
                        <div key={balloon.id} onclick={pop} style={style}>
                            <div style="position:absolute; bottom:-20px; left:50%; width:2px; height:20px; background:rgba(0,0,0,0.2);"></div>
                            <div style="position:absolute; top:15%; left:20%; width:20%; height:10%; background:rgba(255,255,255,0.4); border-radius:50%; transform:rotate(-45deg);"></div>
                        </div>
                    }
                }) }
                <div style="position:absolute; bottom:10px; width:100%; text-align:center; font-weight:bold; color:#64748b; pointer-events:none;">
                    { format!("Pop the balloons! ({} remaining)", field.remaining()) }
                </div>
            </div>
        </div>
    }
}
