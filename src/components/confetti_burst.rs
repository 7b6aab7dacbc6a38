use crate::model::Theme;
use crate::state::confetti::{ConfettiParticle, burst, step};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiBurstProps {
    pub theme: Theme,
}

/// Full-viewport celebratory burst. Runs its own frame loop and stops
/// rescheduling once every particle has expired; unmounting cancels any
/// frame still pending.
#[function_component(ConfettiBurst)]
pub fn confetti_burst(props: &ConfettiBurstProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let theme = props.theme;
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            let particles: Rc<RefCell<Vec<ConfettiParticle>>> = Rc::new(RefCell::new(burst(
                theme.confetti_count(),
                theme.confetti_spread_deg(),
                theme.confetti_colors(),
                width,
                height,
                js_sys::Math::random,
            )));
            let last_ts: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let window_loop = window.clone();
                let canvas = canvas.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                    let dt = match last_ts.get() {
                        Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, 0.05),
                        None => 0.0,
                    };
                    last_ts.set(Some(now_ms));
                    let mut batch = particles.borrow_mut();
                    step(&mut batch, dt);

                    let ctx = match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(c) => c,
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    ctx.clear_rect(0.0, 0.0, w, h);
                    for p in batch.iter() {
                        ctx.set_global_alpha(p.life.clamp(0.0, 1.0));
                        ctx.set_fill_style_str(p.color);
                        ctx.fill_rect(p.x, p.y, p.size, p.size * 0.6);
                    }
                    ctx.set_global_alpha(1.0);

                    if !batch.is_empty() {
                        if let Ok(id) = window_loop.request_animation_frame(
                            closure_cell_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        ) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
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

    html! {
        <canvas ref={canvas_ref}
                style="position:fixed; inset:0; width:100vw; height:100vh; pointer-events:none; z-index:100;"></canvas>
    }
}
