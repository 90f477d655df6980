use crate::components::category_badge::CategoryBadge;
use crate::components::mode_toggle::ModeToggle;
use crate::components::sketchfab_embed::SketchfabEmbed;
use crate::models::vehicle::{self, Vehicle};
use crate::Route;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

const NO_SCROLLBAR_CLASS: &str = "no-scrollbar";

fn set_scrollbar_hidden(hidden: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if hidden {
            classes.add_1(NO_SCROLLBAR_CLASS)
        } else {
            classes.remove_1(NO_SCROLLBAR_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle scrollbar class: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
struct VehicleCardProps {
    vehicle: &'static Vehicle,
    index: usize,
}

#[function_component]
fn VehicleCard(props: &VehicleCardProps) -> Html {
    let vehicle = props.vehicle;
    let navigator = use_navigator();

    let onclick = {
        let slug = vehicle.slug.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::ModelDetail { slug: slug.clone() });
            }
        })
    };

    let media = match &vehicle.image {
        Some(image) => {
            let style = format!(
                "object-position: {}; object-fit: {};",
                vehicle.image_position.as_deref().unwrap_or("center center"),
                vehicle.image_fit.map(|fit| fit.as_css()).unwrap_or("cover"),
            );
            html! {
                <img class="card-image" src={image.clone()} alt={vehicle.name.clone()} loading="lazy" {style} />
            }
        }
        None => html! {
            <SketchfabEmbed
                url={vehicle.sketchfab_url.clone()}
                title={vehicle.name.clone()}
                thumbnail_only=true
                class={classes!("card-image")}
            />
        },
    };

    html! {
        <div class="vehicle-card" {onclick} style={format!("animation-delay: {}s;", props.index as f64 * 0.1)}>
            <div class="card-media">
                <div class="card-media-shade"></div>
                { media }
                <div class="card-badge">
                    <CategoryBadge category={vehicle.category.clone()} />
                </div>
            </div>
            <div class="card-content">
                <div class="card-meta">
                    <span class="card-year">{vehicle.year}</span>
                    <span class="card-production">{vehicle.production.clone()}</span>
                </div>
                <h3 class="card-name">{vehicle.name.clone()}</h3>
                <p class="card-tagline">{vehicle.tagline.clone()}</p>
                <div class="card-footer">
                    <div class="card-figures">
                        <span>{vehicle.specs.horsepower.clone()}</span>
                        <span class="card-figure-divider"></span>
                        <span>{vehicle.specs.top_speed.clone()}</span>
                    </div>
                    <div class="card-explore">{"Explore →"}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn Collection() -> Html {
    // Hide the scrollbar while mounted; scrolling itself stays enabled.
    use_effect_with_deps(
        move |_| {
            set_scrollbar_hidden(true);
            || set_scrollbar_hidden(false)
        },
        (),
    );

    html! {
        <div class="collection-page">
            <style>{COLLECTION_CSS}</style>
            <div class="collection-backdrop"></div>

            <nav class="collection-nav">
                <Link<Route> to={Route::Home} classes="collection-back">
                    <span class="collection-back-icon">{"←"}</span>
                    <span>{"Back to World"}</span>
                </Link<Route>>
                <ModeToggle />
            </nav>

            <div class="collection-body">
                <div class="collection-heading">
                    <h2>{"The Collection"}</h2>
                    <div class="collection-rule"></div>
                    <p>{"The union of Art and Science."}</p>
                </div>

                <div class="collection-grid">
                    { for vehicle::all().iter().enumerate().map(|(index, v)| html! {
                        <VehicleCard key={v.id} vehicle={v} {index} />
                    }) }
                </div>
            </div>
        </div>
    }
}

const COLLECTION_CSS: &str = r#"
    .collection-page {
        position: relative;
        min-height: 100vh;
        background: var(--background);
        padding-bottom: 5rem;
    }
    .collection-backdrop {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 60vw;
        height: 60vh;
        transform: translate(-50%, -50%);
        background: linear-gradient(135deg, rgba(99, 102, 241, 0.05), rgba(244, 63, 94, 0.05));
        filter: blur(120px);
        border-radius: 9999px;
        pointer-events: none;
    }
    .collection-nav {
        position: absolute;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 2rem;
    }
    .collection-back {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: var(--muted-foreground);
        text-decoration: none;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .collection-back:hover {
        color: var(--foreground);
    }
    .collection-back-icon {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        border: 1px solid var(--border);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .collection-body {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 8rem 2rem 0;
    }
    .collection-heading {
        text-align: center;
        margin-bottom: 5rem;
        animation: card-rise 0.8s ease both;
    }
    .collection-heading h2 {
        font-size: 3.75rem;
        font-weight: 700;
        letter-spacing: -0.04em;
        margin-bottom: 1rem;
    }
    .collection-rule {
        height: 2px;
        width: 4rem;
        background: var(--primary);
        opacity: 0.5;
        margin: 0 auto 1.5rem;
    }
    .collection-heading p {
        color: var(--muted-foreground);
        font-size: 1.25rem;
        font-weight: 300;
    }
    .collection-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .vehicle-card {
        display: flex;
        flex-direction: column;
        height: 100%;
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 1.5rem;
        overflow: hidden;
        cursor: pointer;
        transition: border-color 0.5s ease, box-shadow 0.5s ease;
        animation: card-rise 0.5s ease both;
    }
    .vehicle-card:hover {
        border-color: var(--primary);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.35);
    }
    .card-media {
        position: relative;
        width: 100%;
        aspect-ratio: 4 / 3;
        overflow: hidden;
        background: var(--muted);
    }
    .card-media-shade {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
        opacity: 0.6;
        pointer-events: none;
    }
    .card-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .vehicle-card:hover .card-image {
        transform: scale(1.05);
    }
    .card-badge {
        position: absolute;
        top: 1rem;
        left: 1rem;
        z-index: 20;
    }
    .category-badge {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(0, 0, 0, 0.2);
        backdrop-filter: blur(12px);
        color: #fff;
        font-size: 10px;
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
    .category-dot {
        width: 6px;
        height: 6px;
        border-radius: 9999px;
    }
    .card-content {
        display: flex;
        flex-direction: column;
        flex-grow: 1;
        padding: 2rem;
    }
    .card-meta {
        display: flex;
        justify-content: space-between;
        font-size: 10px;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin-bottom: 0.5rem;
    }
    .card-year {
        color: var(--primary);
        font-weight: 700;
    }
    .card-production {
        color: var(--muted-foreground);
    }
    .card-name {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .card-tagline {
        flex-grow: 1;
        color: var(--muted-foreground);
        font-size: 0.875rem;
        font-weight: 300;
        margin-bottom: 1.5rem;
    }
    .card-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding-top: 1rem;
        border-top: 1px solid var(--border);
    }
    .card-figures {
        display: flex;
        gap: 1rem;
        font-size: 0.75rem;
        color: var(--muted-foreground);
    }
    .card-figure-divider {
        width: 1px;
        height: 1rem;
        background: var(--border);
    }
    .card-explore {
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        transition: transform 0.3s ease;
    }
    .vehicle-card:hover .card-explore {
        transform: translateX(4px);
    }
    @keyframes card-rise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 1024px) {
        .collection-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .collection-grid {
            grid-template-columns: 1fr;
        }
        .collection-heading h2 {
            font-size: 2.25rem;
        }
        .collection-nav {
            padding: 1.5rem;
        }
    }
"#;
