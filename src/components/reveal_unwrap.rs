use crate::model::{LayerKind, Theme, WrapAction, WrapLayer, WrapStack};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealUnwrapProps {
    pub theme: Theme,
    pub on_reveal: Callback<()>,
}

/// A peeled layer mid-flight; it animates off the box and fades out where
/// it lands.
#[derive(Clone, Debug, PartialEq)]
struct FlyingLayer {
    layer: WrapLayer,
    dx: f64,
    dy: f64,
    rot: f64,
}

/// Tap-to-unwrap reveal: each tap peels the front layer off the gift box;
/// emptying the stack reports completion on that same tap.
#[function_component(RevealUnwrap)]
pub fn reveal_unwrap(props: &RevealUnwrapProps) -> Html {
    let theme = props.theme;
    let stack = use_reducer_eq(move || WrapStack::new(theme));
    let flying = use_state(Vec::<FlyingLayer>::new);

    {
        let on_reveal = props.on_reveal.clone();
        use_effect_with(stack.is_open(), move |open| {
            if *open {
                on_reveal.emit(());
            }
            || ()
        });
    }

    let on_tap = {
        let stack = stack.clone();
        let flying = flying.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(front) = stack.layers.first().copied() {
                let mut list = (*flying).clone();
                list.push(FlyingLayer {
                    layer: front,
                    dx: js_sys::Math::random() * 400.0 - 200.0,
                    dy: js_sys::Math::random() * 400.0 - 200.0,
                    rot: js_sys::Math::random() * 90.0 - 45.0,
                });
                flying.set(list);
            }
            stack.dispatch(WrapAction::Unwrap);
        })
    };

    let knot_color = if theme.is_christmas() { "#b91c1c" } else { "#1d4ed8" };
    let total = stack.layers.len();

    let layer_face = |layer: &WrapLayer| -> Html {
        if layer.kind == LayerKind::Ribbon {
            html! {
                <div style="width:100%; height:100%; position:relative;">
                    <div style={format!("position:absolute; top:50%; left:0; right:0; height:40px; background:{}; transform:translateY(-50%); box-shadow:0 2px 4px rgba(0,0,0,0.2);", layer.color)}></div>
                    <div style={format!("position:absolute; left:50%; top:0; bottom:0; width:40px; background:{}; transform:translateX(-50%); box-shadow:2px 0 4px rgba(0,0,0,0.2);", layer.color)}></div>
                    <div style={format!("position:absolute; top:50%; left:50%; width:70px; height:70px; border-radius:50%; background:{knot_color}; transform:translate(-50%, -50%); box-shadow:0 4px 12px rgba(0,0,0,0.3); z-index:10;")}></div>
                </div>
            }
        } else if theme.is_christmas() {
            html! {
                <div style="width:100%; height:100%; opacity:0.15; background-image:radial-gradient(circle, #fff 3px, transparent 3px); background-size:24px 24px;"></div>
            }
        } else {
            html! {}
        }
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center;">
            <style>
                {"@keyframes gift-fly-off { to { opacity:0; transform:translate(var(--fly-x), var(--fly-y)) rotate(var(--fly-r)) scale(1.5); } }"}
            </style>
            <h1 style="margin:0 0 6px 0; font-size:26px; color:#0f172a;">{"Tap to unwrap"}</h1>
            <p style="margin:0 0 24px 0; color:#475569; line-height:1.5;">
                {"Peel away every layer to open your present."}
            </p>
            <div onclick={on_tap}
                 style="width:200px; height:200px; position:relative; cursor:pointer; margin-bottom:32px;">
                <div style="position:absolute; inset:0; background:#fff; box-shadow:0 20px 40px rgba(0,0,0,0.1); border-radius:12px; display:flex; align-items:center; justify-content:center;">
                    <span style="font-size:3rem; opacity:0.5;">{"🎁"}</span>
                </div>
                { for stack.layers.iter().enumerate().map(|(index, layer)| {
                    let tilt = if index % 2 == 0 { 1 } else { -1 };
                    let background = match layer.kind {
                        LayerKind::Ribbon => "transparent",
                        LayerKind::Paper => layer.color,
                    };
                    let style = format!(
                        "position:absolute; inset:{}px; background:{}; border-radius:12px; \
                         z-index:{}; display:flex; align-items:center; justify-content:center; \
                         box-shadow:0 4px 6px rgba(0,0,0,0.1); pointer-events:none; \
                         transform:rotate({}deg);",
                        index as i32 * -2,
                        background,
                        total - index,
                        tilt,
                    );
                    html! {
                        <div key={layer.id} style={style}>
                            { layer_face(layer) }
                        </div>
                    }
                }) }
                { for flying.iter().map(|fly| {
                    let style = format!(
                        "position:absolute; inset:0; background:{}; border-radius:12px; \
                         z-index:{}; pointer-events:none; \
                         --fly-x:{:.0}px; --fly-y:{:.0}px; --fly-r:{:.0}deg; \
                         animation:gift-fly-off 0.6s ease-in forwards;",
                        if fly.layer.kind == LayerKind::Ribbon { "transparent" } else { fly.layer.color },
                        total + 1,
                        fly.dx,
                        fly.dy,
                        fly.rot,
                    );
                    html! {
                        <div key={format!("fly-{}", fly.layer.id)} style={style}>
                            { layer_face(&fly.layer) }
                        </div>
                    }
                }) }
            </div>
            <div style="font-weight:bold; color:#64748b;">
                { format!("Tap to Unwrap! ({} layers left)", stack.layers.len()) }
            </div>
        </div>
    }
}
