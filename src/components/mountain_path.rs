use super::climber::Climber;
use crate::geometry::{PathMetrics, Point, svg_path_d};
use crate::model::Theme;
use crate::state::trail::Trail;
use yew::prelude::*;

/// Waypoints of the climb trail in the 300x400 logical space, foot of the
/// mountain to the summit.
const POINTS: [Point; 6] = [
    Point { x: 20.0, y: 380.0 },
    Point { x: 80.0, y: 250.0 },
    Point { x: 120.0, y: 290.0 },
    Point { x: 180.0, y: 120.0 },
    Point { x: 220.0, y: 160.0 },
    Point { x: 280.0, y: 20.0 },
];

#[derive(Properties, PartialEq, Clone)]
pub struct MountainPathProps {
    /// 0 to 100.
    pub progress: f64,
    pub theme: Theme,
    #[prop_or_default]
    pub avatar_image: Option<&'static str>,
}

/// The mountain scene: silhouette, dashed track, lit progress stroke, a glow
/// trail behind the climber, and the climber marker itself.
#[function_component(MountainPath)]
pub fn mountain_path(props: &MountainPathProps) -> Html {
    let metrics = use_memo((), |_| PathMetrics::new(&POINTS));
    let trail = use_mut_ref(Trail::default);

    let pos = metrics.point_at_progress(props.progress);

    // Drop a glow dot at each position change mid-climb; reset with the climb.
    {
        let trail = trail.clone();
        use_effect_with(props.progress, move |progress| {
            if *progress > 0.0 && *progress < 100.0 {
                trail.borrow_mut().push(pos.x, pos.y);
            } else if *progress == 0.0 {
                trail.borrow_mut().clear();
            }
            || ()
        });
    }

    let path_d = svg_path_d(&POINTS);
    let mountain_shape = format!("{path_d} L 280 380 L 20 380 Z");
    let dash_offset = format!("{}", 100.0 - props.progress);
    let stroke = props.theme.stroke_color();
    let track = props.theme.track_color();
    let glow = if props.theme.is_christmas() { "#fbbf24" } else { "#60a5fa" };

    let dots = {
        let trail = trail.borrow();
        trail
            .dots()
            .iter()
            .map(|dot| {
                let style = format!(
                    "position:absolute; left:{}%; top:{}%; width:6px; height:6px; \
                     border-radius:50%; background:{}; opacity:{:.2}; \
                     box-shadow:0 0 4px rgba(255,255,255,0.8); transform:translate(-50%, -50%);",
                    dot.x / 300.0 * 100.0,
                    dot.y / 400.0 * 100.0,
                    glow,
                    trail.fade(dot) * 0.8,
                );
                html! { <div key={dot.seq.to_string()} style={style}></div> }
            })
            .collect::<Html>()
    };

    html! {
        <div style="position:relative; width:100%; max-width:300px; aspect-ratio:300/400; margin:0 auto;">
            <svg viewBox="0 0 300 400" fill="none" xmlns="http://www.w3.org/2000/svg"
                 style="width:100%; height:100%; overflow:visible;">
                <defs>
                    <linearGradient id="mountain-gradient" x1="150" y1="0" x2="150" y2="400" gradientUnits="userSpaceOnUse">
                        <stop offset="0%" stop-color="#e2e8f0" stop-opacity="0.8" />
                        <stop offset="100%" stop-color="#f8fafc" stop-opacity="0.2" />
                    </linearGradient>
                </defs>
                <path d={mountain_shape} fill="url(#mountain-gradient)" stroke="#cbd5e1"
                      stroke-width="2" stroke-linejoin="round" />
                <path d={path_d.clone()} fill="none" stroke={track} stroke-width="4"
                      stroke-linecap="round" stroke-linejoin="round" stroke-dasharray="8 8" />
                // Lit portion of the trail; pathLength normalises the dash
                // arithmetic to the 0..100 progress scale.
                <path d={path_d} fill="none" stroke={stroke} stroke-width="4"
                      stroke-linecap="round" stroke-linejoin="round"
                      pathLength="100" stroke-dasharray="100" stroke-dashoffset={dash_offset} />
            </svg>
            <div style="position:absolute; left:0; top:0; width:100%; height:100%; pointer-events:none;">
                { dots }
                <div style={format!(
                    "position:absolute; left:{}%; top:{}%; transform:translate(-50%, -50%); transition:left 0.1s linear, top 0.1s linear;",
                    pos.x / 300.0 * 100.0,
                    pos.y / 400.0 * 100.0,
                )}>
                    <Climber theme={props.theme} image={props.avatar_image} />
                </div>
            </div>
        </div>
    }
}
