use crate::model::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClimberProps {
    pub theme: Theme,
    #[prop_or_default]
    pub image: Option<&'static str>,
}

/// The marker that rides the trail: a custom avatar when the gift supplies
/// one, otherwise a generic climber glyph. Christmas adds the hat.
#[function_component(Climber)]
pub fn climber(props: &ClimberProps) -> Html {
    let border = if props.theme.is_christmas() { "#bbf7d0" } else { "#bfdbfe" };
    let color = if props.theme.is_christmas() { "#dc2626" } else { "#1d4ed8" };
    html! {
        <div style={format!(
            "position:relative; width:36px; height:36px; border-radius:50%; background:#fff; \
             border:3px solid {border}; box-shadow:0 2px 8px rgba(15,23,42,0.25); \
             display:flex; align-items:center; justify-content:center; color:{color};"
        )}>
            { if props.theme.is_christmas() {
                html! {
                    <div style="position:absolute; top:-12px; left:-4px; font-size:18px; transform:rotate(-15deg); z-index:10;">
                        {"🎅"}
                    </div>
                }
            } else { html! {} } }
            <div style="position:relative; width:100%; height:100%; display:flex; align-items:center; justify-content:center; overflow:hidden; border-radius:50%;">
                { if let Some(src) = props.image {
                    html! { <img src={src} alt="Climber" style="width:100%; height:100%; object-fit:cover;" /> }
                } else {
                    html! {
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" style="width:20px; height:20px;">
                            <path fill-rule="evenodd"
                                  d="M7.5 6a4.5 4.5 0 119 0 4.5 4.5 0 01-9 0zM3.751 20.105a8.25 8.25 0 0116.498 0 .75.75 0 01-.437.695A18.683 18.683 0 0112 22.5c-2.786 0-5.433-.608-7.812-1.7a.75.75 0 01-.437-.695z"
                                  clip-rule="evenodd" />
                        </svg>
                    }
                } }
            </div>
        </div>
    }
}
