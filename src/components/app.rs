use super::{gift_page::GiftPage, home_page::HomePage, not_found_page::NotFoundPage};
use crate::router::{self, Route};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(router::current_route);

    // Follow browser back/forward; our own navigation pushes entries itself.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let popstate_cb = {
                let route = route.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    route.set(router::current_route());
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "popstate",
                    popstate_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "popstate",
                    popstate_cb.as_ref().unchecked_ref(),
                );
                drop(popstate_cb);
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |to: Route| {
            router::push_route(&to);
            route.set(to);
        })
    };

    html! {
        <div id="root">
            {
                match (*route).clone() {
                    Route::Home => html! { <HomePage navigate={navigate.clone()} /> },
                    Route::Gift(slug) => html! {
                        <GiftPage key={slug.clone()} slug={slug.clone()} navigate={navigate.clone()} />
                    },
                    Route::NotFound => html! { <NotFoundPage navigate={navigate.clone()} /> },
                }
            }
        </div>
    }
}
