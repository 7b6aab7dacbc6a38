use crate::model::Gift;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GiftVoucherProps {
    pub gift: &'static Gift,
}

/// The static voucher shown once the reveal completes.
#[function_component(GiftVoucher)]
pub fn gift_voucher(props: &GiftVoucherProps) -> Html {
    let gift = props.gift;
    let christmas = gift.christmas;

    let section = |icon: &str, title: &str, items: &'static [&'static str]| -> Html {
        html! {
            <section style="margin-top:24px;">
                <div style="display:flex; align-items:center; gap:8px; margin-bottom:10px;">
                    <span aria-hidden="true" style="font-size:20px;">{ icon.to_string() }</span>
                    <h2 style="margin:0; font-size:18px; color:#0f172a;">{ title.to_string() }</h2>
                </div>
                <ul style="margin:0; padding-left:20px; color:#334155; line-height:1.7;">
                    { for items.iter().map(|item| html! {
                        // Items carry simple inline markup supplied with the
                        // compiled-in gift table, not user input.
                        <li>{ Html::from_html_unchecked(AttrValue::Static(*item)) }</li>
                    }) }
                </ul>
            </section>
        }
    };

    html! {
        <article style="background:#fff; border-radius:20px; box-shadow:0 16px 40px rgba(15,23,42,0.14); max-width:560px; width:100%; overflow:hidden;">
            <div style="position:relative;">
                <img src={gift.hero_image} alt={gift.title}
                     style="display:block; width:100%; height:220px; object-fit:cover; background:#e2e8f0;" />
                { if christmas {
                    html! {
                        <div style="position:absolute; bottom:12px; left:12px; background:rgba(22,101,52,0.92); color:#fff; padding:6px 14px; border-radius:999px; font-size:14px;">
                            { format!("🎄 Merry Christmas, {}! 🎅", gift.recipient_name) }
                        </div>
                    }
                } else { html! {} } }
            </div>
            <div style="padding:28px 32px 24px 32px;">
                <header>
                    { if christmas {
                        html! { <p style="margin:0 0 6px 0; font-size:12px; letter-spacing:1.5px; text-transform:uppercase; color:#166534;">{"A Special Christmas Gift"}</p> }
                    } else { html! {} } }
                    <h1 style="margin:0 0 6px 0; font-size:22px; color:#0f172a; line-height:1.3;">{ gift.title }</h1>
                    { if !gift.subtitle.is_empty() {
                        html! { <p style="margin:0 0 8px 0; color:#64748b; font-size:15px;">{ gift.subtitle }</p> }
                    } else { html! {} } }
                    <p style="margin:0; color:#475569; line-height:1.6;">{ gift.intro }</p>
                </header>
                { section(if christmas { "🎁" } else { "🎟️" }, gift.included_title, gift.included_items) }
                { if let (Some(title), Some(items)) = (gift.extra_title, gift.extra_items) {
                    section("📅", title, items)
                } else { html! {} } }
                <footer style="margin-top:28px; border-top:1px solid #e2e8f0; padding-top:16px; text-align:center;">
                    { if christmas {
                        html! { <p style="margin:0; color:#166534;">{"Have a wonderful Christmas! We'll plan the details in the New Year."}</p> }
                    } else {
                        html! {
                            <a href={format!("mailto:gifts@example.com?subject=Let%27s%20plan%20it%2C%20{}", gift.recipient_name)}
                               style="color:#1d4ed8; font-weight:600; text-decoration:none;">
                                {"Message me to plan it"}
                            </a>
                        }
                    } }
                </footer>
            </div>
        </article>
    }
}
