use super::{gift_reveal::GiftReveal, gift_voucher::GiftVoucher};
use crate::data::gift_by_slug;
use crate::router::Route;
use crate::util::clog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GiftPageProps {
    pub slug: String,
    pub navigate: Callback<Route>,
}

#[function_component(GiftPage)]
pub fn gift_page(props: &GiftPageProps) -> Html {
    let revealed = use_state(|| false);

    let Some(gift) = gift_by_slug(&props.slug) else {
        clog(&format!("no gift matches slug '{}'", props.slug));
        let go_home = {
            let navigate = props.navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                navigate.emit(Route::Home);
            })
        };
        return html! {
            <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#f8fafc; font-family:sans-serif; padding:24px;">
                <div style="background:#fff; border-radius:16px; box-shadow:0 8px 24px rgba(15,23,42,0.1); padding:32px 36px; max-width:420px; text-align:center;">
                    <p style="margin:0 0 6px 0; font-size:13px; letter-spacing:1.5px; text-transform:uppercase; color:#64748b;">{"No such present"}</p>
                    <h1 style="margin:0 0 10px 0; font-size:24px; color:#0f172a;">{"That link does not match a gift"}</h1>
                    <p style="margin:0 0 20px 0; color:#64748b;">{"Double-check the URL, or head back to the main page."}</p>
                    <a href="/" onclick={go_home} style="color:#1d4ed8; font-weight:600; text-decoration:none;">{"Back to home"}</a>
                </div>
            </div>
        };
    };

    let on_complete = {
        let revealed = revealed.clone();
        Callback::from(move |_| revealed.set(true))
    };

    let background = if gift.christmas {
        "linear-gradient(160deg, #f0fdf4, #fef2f2)"
    } else {
        "linear-gradient(160deg, #eff6ff, #f8fafc)"
    };

    html! {
        <div style={format!("min-height:100vh; display:flex; align-items:center; justify-content:center; background:{background}; font-family:sans-serif; padding:24px;")}>
            {
                if !*revealed {
                    html! { <GiftReveal gift={gift} on_complete={on_complete} /> }
                } else {
                    html! { <GiftVoucher gift={gift} /> }
                }
            }
        </div>
    }
}
