use crate::data::GIFTS;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:linear-gradient(160deg, #eff6ff, #f8fafc); font-family:sans-serif; padding:24px;">
            <div style="background:#fff; border-radius:20px; box-shadow:0 12px 32px rgba(15,23,42,0.12); padding:36px 40px; max-width:480px; width:100%; text-align:center;">
                <p style="margin:0 0 6px 0; font-size:13px; letter-spacing:1.5px; text-transform:uppercase; color:#64748b;">{"Personalised Presents 🎁"}</p>
                <h1 style="margin:0 0 10px 0; font-size:30px; color:#0f172a;">{"Welcome!"}</h1>
                <p style="margin:0 0 24px 0; color:#475569; line-height:1.5;">
                    {"If you have a personalised link, open it to reveal your surprise. Each link is crafted for a specific person and gift."}
                </p>
                <div style="border-top:2px dashed #e2e8f0; padding-top:20px;">
                    <p style="margin:0 0 12px 0; font-size:14px; color:#64748b;">{"Testing links for convenience:"}</p>
                    <div style="display:flex; flex-wrap:wrap; gap:8px; justify-content:center;">
                        { for GIFTS.iter().map(|gift| {
                            let to = Route::Gift(gift.slug.to_string());
                            let href = to.href();
                            let onclick = {
                                let navigate = props.navigate.clone();
                                let to = to.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    navigate.emit(to.clone());
                                })
                            };
                            html! {
                                <a key={gift.slug} href={href.clone()} {onclick}
                                   style="padding:6px 14px; border-radius:999px; background:#eff6ff; color:#1d4ed8; text-decoration:none; font-size:14px; border:1px solid #bfdbfe;">
                                    { format!("/{}", gift.slug) }
                                </a>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
