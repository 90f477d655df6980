use crate::components::mode_toggle::ModeToggle;
use crate::components::sketchfab_embed::SketchfabEmbed;
use crate::models::vehicle::{self, Vehicle};
use crate::utils::scroll::{interpolate, model_visibility, use_window_scroll, ScrollMetrics};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Share of page scroll over which the hero text fades out.
const HERO_FADE_END: f64 = 0.2;
const HERO_LIFT_PX: f64 = -50.0;

#[derive(Properties, PartialEq)]
pub struct ModelDetailProps {
    pub slug: AttrValue,
}

/// Looks up the vehicle for a detail slug, or the route to bounce to.
pub(crate) fn resolve_detail(slug: &str) -> Result<&'static Vehicle, Route> {
    vehicle::find_by_slug(slug).ok_or(Route::Collection)
}

#[function_component]
pub fn ModelDetail(props: &ModelDetailProps) -> Html {
    match resolve_detail(&props.slug) {
        Ok(vehicle) => html! { <ModelShowcase {vehicle} /> },
        Err(to) => {
            log::info!("Unknown model slug `{}`, redirecting to collection", props.slug);
            html! { <Redirect<Route> {to} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ModelShowcaseProps {
    vehicle: &'static Vehicle,
}

#[function_component]
fn ModelShowcase(props: &ModelShowcaseProps) -> Html {
    let vehicle = props.vehicle;
    let scroll = use_window_scroll();
    let model_visible = use_state_eq(|| true);

    {
        let model_visible = model_visible.clone();
        use_effect_with_deps(
            move |scroll: &ScrollMetrics| {
                model_visible.set(model_visibility(
                    *model_visible,
                    scroll.scroll_y,
                    scroll.viewport_height,
                ));
                || ()
            },
            scroll,
        );
    }

    let progress = scroll.progress();
    let hero_opacity = interpolate(progress, (0.0, HERO_FADE_END), (1.0, 0.0));
    let hero_offset = interpolate(progress, (0.0, HERO_FADE_END), (0.0, HERO_LIFT_PX));
    let hero_style = format!(
        "opacity: {:.3}; transform: translateY({:.1}px);",
        hero_opacity, hero_offset
    );

    let spec_row = |label: &'static str, value: &str| {
        html! {
            <div class="spec-row">
                <span class="spec-label">{label}</span>
                <span class="spec-value">{value.to_string()}</span>
            </div>
        }
    };

    html! {
        <div class="detail-page">
            <style>{DETAIL_CSS}</style>

            <div class="detail-nav">
                <Link<Route> to={Route::Collection} classes="detail-back">
                    <span class="detail-back-icon">{"←"}</span>
                    {"Back to Collection"}
                </Link<Route>>
            </div>
            <div class="detail-toggle">
                <ModeToggle />
            </div>

            <div class="detail-stage">
                <div class="detail-stage-guard"></div>
                <SketchfabEmbed
                    url={vehicle.sketchfab_url.clone()}
                    title={vehicle.name.clone()}
                    hide_ui=true
                    visible={*model_visible}
                    thumbnail={vehicle.image.clone().map(AttrValue::from)}
                />
                <div class="detail-stage-top"></div>
                <div class="detail-stage-bottom"></div>
            </div>

            <div class="detail-hero" style={hero_style}>
                <div class="detail-hero-text">
                    <p class="detail-hero-meta">{format!("{} / {}", vehicle.year, vehicle.production)}</p>
                    <h1 class="detail-hero-name">{vehicle.name.clone()}</h1>
                    <p class="detail-hero-tagline">{vehicle.tagline.clone()}</p>
                </div>
                <div class="detail-scroll-cue">
                    <span>{"Scroll to Explore"}</span>
                    <div class="detail-scroll-line"></div>
                </div>
            </div>

            <div class="detail-spacer"></div>

            <section class="detail-specs">
                <div class="detail-specs-inner">
                    <div class="detail-specs-header">
                        <h2>{"Heritage & Specifications"}</h2>
                        <span class="detail-ref">{format!("REF: {}", vehicle.slug.to_uppercase())}</span>
                    </div>

                    <div class="detail-specs-grid">
                        <div class="detail-column">
                            <div>
                                <h4>{"Engine & Power"}</h4>
                                { spec_row("Engine", &vehicle.specs.engine) }
                                { spec_row("Horsepower", &vehicle.specs.horsepower) }
                                { spec_row("Transmission", &vehicle.specs.transmission) }
                                { spec_row("Drivetrain", &vehicle.specs.drivetrain) }
                            </div>
                            <div>
                                <h4>{"Performance"}</h4>
                                { spec_row("Top Speed", &vehicle.specs.top_speed) }
                                { spec_row("0-100 km/h", &vehicle.specs.acceleration) }
                                { spec_row("Weight", &vehicle.specs.weight) }
                            </div>
                        </div>

                        <div class="detail-column">
                            <div>
                                <h4>{"Legacy"}</h4>
                                <p class="detail-description">{vehicle.description.clone()}</p>
                            </div>
                            <div class="detail-art-card">
                                <h4>{"The Art of Engineering"}</h4>
                                <p>
                                    {format!("{} is a testament to Horacio Pagani's philosophy that art and science can walk hand in hand. Every component is machined from solid aluminum or crafted from carbon fiber.", vehicle.name)}
                                </p>
                                <span class="detail-art-tag">{"Uncompromised Design"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

const DETAIL_CSS: &str = r#"
    .detail-page {
        position: relative;
        min-height: 200vh;
        background: var(--background);
    }
    .detail-nav {
        position: fixed;
        top: 1.5rem;
        left: 1.5rem;
        z-index: 50;
        mix-blend-mode: difference;
    }
    .detail-back {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 9999px;
        color: #fff;
        text-decoration: none;
        backdrop-filter: blur(12px);
        transition: padding 0.3s ease;
    }
    .detail-back:hover {
        padding-left: 1rem;
    }
    .detail-toggle {
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 50;
    }
    .detail-stage {
        position: fixed;
        inset: 0;
        z-index: 0;
        height: 100vh;
        width: 100%;
    }
    .detail-stage-guard {
        display: none;
    }
    .detail-stage-top {
        position: absolute;
        left: 0;
        right: 0;
        top: 0;
        height: 10rem;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), transparent);
        pointer-events: none;
    }
    .detail-stage-bottom {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 15rem;
        background: linear-gradient(to top, var(--background), transparent);
        pointer-events: none;
    }
    .detail-hero {
        position: fixed;
        inset: 0;
        z-index: 10;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: flex-end;
        padding-bottom: 8rem;
        pointer-events: none;
    }
    .detail-hero-text {
        text-align: center;
        padding: 0 1rem;
        color: #fff;
    }
    .detail-hero-meta {
        font-weight: 500;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        opacity: 0.8;
        margin-bottom: 1rem;
    }
    .detail-hero-name {
        font-size: clamp(3rem, 8vw, 6rem);
        font-weight: 700;
        letter-spacing: -0.04em;
        margin-bottom: 0.5rem;
        text-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .detail-hero-tagline {
        font-size: 1.25rem;
        font-weight: 300;
        opacity: 0.9;
    }
    .detail-scroll-cue {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: rgba(255, 255, 255, 0.5);
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        animation: detail-bounce 1s infinite;
    }
    .detail-scroll-line {
        width: 1px;
        height: 3rem;
        background: linear-gradient(to bottom, #fff, transparent);
    }
    .detail-spacer {
        position: relative;
        z-index: 10;
        height: 100vh;
        pointer-events: none;
    }
    .detail-specs {
        position: relative;
        z-index: 20;
        min-height: 100vh;
        background: var(--background);
        border-top: 1px solid var(--border);
        box-shadow: 0 -20px 50px rgba(0, 0, 0, 0.5);
    }
    .detail-specs-inner {
        max-width: 56rem;
        margin: 0 auto;
        padding: 6rem 1rem;
    }
    .detail-specs-header {
        display: flex;
        align-items: baseline;
        justify-content: space-between;
        gap: 1rem;
        border-bottom: 1px solid var(--border);
        padding-bottom: 2rem;
        margin-bottom: 4rem;
    }
    .detail-specs-header h2 {
        font-size: 2.25rem;
        font-weight: 700;
    }
    .detail-ref {
        font-family: ui-monospace, monospace;
        color: var(--muted-foreground);
    }
    .detail-specs-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 6rem;
    }
    .detail-column {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .detail-column h4 {
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: var(--muted-foreground);
        font-weight: 600;
        margin-bottom: 1rem;
    }
    .spec-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem 0;
        border-bottom: 1px solid var(--border);
    }
    .spec-label {
        color: var(--muted-foreground);
    }
    .spec-value {
        font-weight: 500;
        font-size: 1.125rem;
    }
    .detail-description {
        font-size: 1.125rem;
        line-height: 1.7;
        color: var(--muted-foreground);
        font-weight: 300;
    }
    .detail-art-card {
        background: var(--muted);
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
    }
    .detail-art-card h4 {
        color: var(--foreground);
        text-transform: none;
        letter-spacing: normal;
        font-size: 1rem;
        font-weight: 700;
    }
    .detail-art-card p {
        color: var(--muted-foreground);
        font-size: 0.875rem;
        line-height: 1.7;
        margin-bottom: 1rem;
    }
    .detail-art-tag {
        color: var(--primary);
        font-size: 0.875rem;
        font-weight: 600;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    @keyframes detail-bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, -25%); }
    }
    @media (max-width: 768px) {
        .detail-stage-guard {
            display: block;
            position: absolute;
            inset: 0;
            z-index: 10;
            background: rgba(0, 0, 0, 0.05);
            pointer-events: none;
        }
        .detail-specs-grid {
            grid-template-columns: 1fr;
            gap: 3rem;
        }
        .detail-specs-header {
            flex-direction: column;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slug_renders_its_vehicle() {
        let vehicle = resolve_detail("zonda-r").expect("zonda-r is in the collection");
        assert_eq!(vehicle.name, "Pagani Zonda R");
    }

    #[test]
    fn unknown_slug_redirects_to_collection() {
        assert_eq!(resolve_detail("does-not-exist"), Err(Route::Collection));
    }
}
