use crate::model::Theme;
use crate::state::scratch::{SAMPLE_CHANCE, SCRATCH_RADIUS, is_cleared};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealScratchProps {
    pub theme: Theme,
    pub on_reveal: Callback<()>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Scratch-card reveal: an opaque coating over the card, erased in circles
/// under the pointer; once enough sampled pixels are transparent the card
/// reports completion. Without a 2d context the whole mechanic is inert.
#[function_component(RevealScratch)]
pub fn reveal_scratch(props: &RevealScratchProps) -> Html {
    let canvas_ref = use_node_ref();
    let container_ref = use_node_ref();
    let drawing = use_mut_ref(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let container_ref = container_ref.clone();
        let drawing = drawing.clone();
        let on_reveal = props.on_reveal.clone();
        let theme = props.theme;
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            let container: Element = container_ref
                .cast::<Element>()
                .expect("container_ref not attached to an element");

            // Size the coating to the container and repaint it.
            let paint: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                Rc::new(move || {
                    let rect = container.get_bounding_client_rect();
                    canvas.set_width(rect.width().max(0.0) as u32);
                    canvas.set_height(rect.height().max(0.0) as u32);
                    let Some(ctx) = context_2d(&canvas) else { return };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    ctx.set_global_composite_operation("source-over").ok();
                    ctx.set_fill_style_str(if theme.is_christmas() { "#d1d5db" } else { "#cbd5e1" });
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_font("bold 24px sans-serif");
                    ctx.set_fill_style_str("#9ca3af");
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    let label = if theme.is_christmas() { "Scratch to Reveal! 🎄" } else { "Scratch Here!" };
                    ctx.fill_text(label, w / 2.0, h / 2.0).ok();
                    // Speckled foil texture.
                    for _ in 0..200 {
                        ctx.set_fill_style_str(if js_sys::Math::random() > 0.5 {
                            "#e5e7eb"
                        } else {
                            "#9ca3af"
                        });
                        ctx.begin_path();
                        ctx.arc(
                            js_sys::Math::random() * w,
                            js_sys::Math::random() * h,
                            js_sys::Math::random() * 2.0,
                            0.0,
                            std::f64::consts::PI * 2.0,
                        )
                        .ok();
                        ctx.fill();
                    }
                })
            };
            (paint)();

            // Erase a circle at client coordinates and occasionally check
            // how much of the coating is gone.
            let scratch: Rc<dyn Fn(f64, f64)> = {
                let canvas = canvas.clone();
                Rc::new(move |client_x: f64, client_y: f64| {
                    let Some(ctx) = context_2d(&canvas) else { return };
                    let rect = canvas.get_bounding_client_rect();
                    ctx.set_global_composite_operation("destination-out").ok();
                    ctx.begin_path();
                    ctx.arc(
                        client_x - rect.left(),
                        client_y - rect.top(),
                        SCRATCH_RADIUS,
                        0.0,
                        std::f64::consts::PI * 2.0,
                    )
                    .ok();
                    ctx.fill();
                    if js_sys::Math::random() < SAMPLE_CHANCE {
                        let w = canvas.width() as f64;
                        let h = canvas.height() as f64;
                        if let Ok(image) = ctx.get_image_data(0.0, 0.0, w, h) {
                            if is_cleared(&image.data()) {
                                on_reveal.emit(());
                            }
                        }
                    }
                })
            };

            let mousedown_cb = {
                let drawing = drawing.clone();
                let scratch = scratch.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    *drawing.borrow_mut() = true;
                    scratch(e.client_x() as f64, e.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .unwrap();

            let mousemove_cb = {
                let drawing = drawing.clone();
                let scratch = scratch.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if *drawing.borrow() {
                        scratch(e.client_x() as f64, e.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .unwrap();

            let mouseup_cb = {
                let drawing = drawing.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    *drawing.borrow_mut() = false;
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();
            canvas
                .add_event_listener_with_callback("mouseleave", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let touch_start_cb = {
                let drawing = drawing.clone();
                let scratch = scratch.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    if let Some(t) = e.touches().item(0) {
                        *drawing.borrow_mut() = true;
                        scratch(t.client_x() as f64, t.client_y() as f64);
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
                .ok();

            let touch_move_cb = {
                let drawing = drawing.clone();
                let scratch = scratch.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    if *drawing.borrow() {
                        if let Some(t) = e.touches().item(0) {
                            scratch(t.client_x() as f64, t.client_y() as f64);
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
                .ok();

            let touch_end_cb = {
                let drawing = drawing.clone();
                Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                    *drawing.borrow_mut() = false;
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref())
                .ok();

            let resize_cb = {
                let paint = paint.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    (paint)();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &resize_cb,
                );
            }
        });
    }

    html! {
        <div>
            <h1 style="margin:0 0 6px 0; font-size:26px; color:#0f172a;">{"Scratch to reveal"}</h1>
            <p style="margin:0 0 20px 0; color:#475569; line-height:1.5;">
                {"Rub away the foil to uncover your surprise."}
            </p>
            <div ref={container_ref}
                 style="position:relative; width:100%; height:300px; border-radius:16px; overflow:hidden; cursor:grab;">
                <div style="position:absolute; top:0; left:0; width:100%; height:100%; display:flex; align-items:center; justify-content:center; background:linear-gradient(45deg, #f3f4f6, #fff); z-index:0;">
                    <h2 style="opacity:0.3; color:#0f172a;">{"Keep scratching..."}</h2>
                </div>
                <canvas ref={canvas_ref}
                        style="position:absolute; top:0; left:0; z-index:10; touch-action:none;"></canvas>
            </div>
        </div>
    }
}
