use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CliffProgressProps {
    pub progress: f64,
}

/// Accessible percent readout shown alongside the mountain.
#[function_component(CliffProgress)]
pub fn cliff_progress(props: &CliffProgressProps) -> Html {
    let clamped = props.progress.clamp(0.0, 100.0);
    let rounded = clamped.round() as i32;
    html! {
        <div role="progressbar" aria-valuemin="0" aria-valuemax="100"
             aria-valuenow={rounded.to_string()}
             style="display:flex; align-items:center; gap:10px;">
            <div style="position:relative; width:160px; height:8px; background:#e2e8f0; border-radius:999px; overflow:hidden;">
                <div style={format!("position:absolute; left:0; top:0; bottom:0; width:{clamped}%; background:#3b82f6; border-radius:999px;")}></div>
            </div>
            <span style="font-size:13px; color:#64748b; min-width:36px; text-align:right;">
                { format!("{rounded}%") }
            </span>
        </div>
    }
}
