use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NotFoundPageProps {
    pub navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let go_home = {
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Route::Home);
        })
    };
    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#f8fafc; font-family:sans-serif; padding:24px;">
            <div style="background:#fff; border-radius:16px; box-shadow:0 8px 24px rgba(15,23,42,0.1); padding:32px 36px; max-width:420px; text-align:center;">
                <p style="margin:0 0 6px 0; font-size:13px; letter-spacing:1.5px; text-transform:uppercase; color:#64748b;">{"404"}</p>
                <h1 style="margin:0 0 10px 0; font-size:24px; color:#0f172a;">{"We could not find that page"}</h1>
                <p style="margin:0 0 20px 0; color:#64748b;">{"Head back to the start and open your personalised link."}</p>
                <a href="/" onclick={go_home} style="color:#1d4ed8; font-weight:600; text-decoration:none;">{"Return home"}</a>
            </div>
        </div>
    }
}
