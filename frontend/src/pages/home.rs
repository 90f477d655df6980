use crate::components::liquid_background::LiquidBackground;
use crate::components::mode_toggle::ModeToggle;
use crate::components::reveal::Reveal;
use crate::config::{BRAND_URL, SOCIAL_LINKS};
use crate::utils::theme::use_theme;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("3", "Model Families"),
    ("100+", "Cars Produced"),
    ("25+", "Years of Art"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Bespoke Engineering",
        "Each Pagani is handcrafted using advanced composite materials, aerospace technologies, and obsessive attention to detail.",
    ),
    (
        "◴",
        "Limited Production",
        "Pagani produces hypercars in extremely limited numbers, ensuring exclusivity and individuality for every owner.",
    ),
    (
        "⚙",
        "Italian Craftsmanship",
        "Designed and built in Modena, Italy, every Pagani blends traditional artisan skills with cutting-edge engineering.",
    ),
];

#[function_component]
pub fn Home() -> Html {
    let theme = use_theme();
    let navigator = use_navigator();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let enter_garage = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Collection);
        }
    });

    let discover_brand = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(BRAND_URL, "_blank") {
                log::warn!("Failed to open brand site: {:?}", e);
            }
        }
    });

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <div class="home-toggle">
                <ModeToggle />
            </div>

            <header class="home-hero">
                <div class="home-hero-background">
                    <LiquidBackground dark={theme.is_dark()} />
                </div>
                <div class="home-hero-glow"></div>
                <div class="home-hero-fade"></div>

                <div class="home-hero-content">
                    <h1 class="home-title">
                        <span class="home-title-brand">{"Pagani Automobili"}</span>
                        <span class="home-title-accent">{"Art Meets Engineering"}</span>
                    </h1>
                    <p class="home-subtitle">
                        {"Founded in Modena, Italy, Pagani Automobili creates handcrafted hypercars that blur the line between mechanical engineering and functional art."}
                    </p>

                    <div class="home-stats">
                        { for STATS.iter().enumerate().map(|(idx, (value, label))| html! {
                            <>
                                if idx > 0 {
                                    <div class="home-stat-divider"></div>
                                }
                                <div class="home-stat">
                                    <div class="home-stat-value">{*value}</div>
                                    <div class="home-stat-label">{*label}</div>
                                </div>
                            </>
                        }) }
                    </div>

                    <div class="home-cta-group">
                        <button class="home-cta primary" onclick={enter_garage}>
                            {"Enter the Garage"}<span class="home-cta-arrow">{"→"}</span>
                        </button>
                        <button class="home-cta outline" onclick={discover_brand}>
                            {"Discover the Brand"}
                        </button>
                    </div>
                </div>
            </header>

            <section class="home-features">
                <Reveal class="home-features-intro">
                    <h2>{"Engineering Without Compromise"}</h2>
                    <p>{"Every Pagani is designed as a unique work of art, engineered beyond regulation."}</p>
                </Reveal>
                <div class="home-feature-grid">
                    { for FEATURES.iter().enumerate().map(|(idx, (icon, title, desc))| html! {
                        <Reveal class="home-feature-card" delay={idx as f64 * 0.2}>
                            <div class="home-feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <footer class="home-footer">
                <div class="home-footer-content">
                    <div class="home-footer-legal">{"© Pagani Automobili S.p.A. · Modena, Italy"}</div>
                    <div class="home-footer-links">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                        }) }
                    </div>
                </div>
            </footer>
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        position: relative;
        background: var(--background);
        color: var(--foreground);
        transition: background-color 0.3s ease, color 0.3s ease;
    }
    .home-toggle {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 50;
    }
    .home-hero {
        position: relative;
        height: 100vh;
        width: 100%;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        overflow: hidden;
    }
    .home-hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
        opacity: 0.4;
        transition: opacity 0.5s ease;
    }
    .dark .home-hero-background {
        opacity: 1;
    }
    .home-hero-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, rgba(99, 102, 241, 0.05), transparent, rgba(244, 63, 94, 0.05));
        filter: blur(64px);
        pointer-events: none;
    }
    .home-hero-fade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, var(--background), transparent, rgba(0, 0, 0, 0.05));
        pointer-events: none;
    }
    .home-hero-content {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1rem;
        text-align: center;
        animation: home-rise 1.2s ease both 0.2s;
    }
    .home-title {
        font-size: clamp(2.5rem, 5vw, 5rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 1.2;
        margin-bottom: 2rem;
    }
    .home-title span {
        display: block;
        padding-bottom: 0.5rem;
    }
    .home-title-accent {
        background: linear-gradient(90deg, #6366f1, #a855f7, #f43f5e);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .home-subtitle {
        font-size: 1.25rem;
        color: var(--muted-foreground);
        line-height: 1.7;
        font-weight: 300;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .home-stats {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 3rem;
        margin-bottom: 2.5rem;
    }
    .home-stat-value {
        font-size: 1.875rem;
        font-weight: 700;
    }
    .home-stat-label {
        font-size: 0.75rem;
        color: var(--muted-foreground);
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .home-stat-divider {
        width: 1px;
        height: 2.5rem;
        background: var(--border);
    }
    .home-cta-group {
        display: flex;
        gap: 1.5rem;
        justify-content: center;
        align-items: center;
    }
    .home-cta {
        padding: 1.25rem 2.5rem;
        font-size: 1.125rem;
        font-weight: 500;
        border-radius: 9999px;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .home-cta.primary {
        background: var(--foreground);
        color: var(--background);
        border: none;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.25);
    }
    .home-cta.primary:hover {
        transform: scale(1.05);
    }
    .home-cta.outline {
        background: transparent;
        color: var(--foreground);
        border: 1px solid var(--border);
        backdrop-filter: blur(4px);
    }
    .home-cta-arrow {
        margin-left: 0.5rem;
    }
    .home-features {
        position: relative;
        z-index: 10;
        padding: 5rem 1rem;
        background: var(--background);
        border-top: 1px solid var(--border);
    }
    .home-features-intro {
        text-align: center;
        margin-bottom: 4rem;
    }
    .home-features-intro h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .home-features-intro p {
        color: var(--muted-foreground);
        font-size: 1.125rem;
    }
    .home-feature-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .home-feature-card {
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 1rem;
        padding: 2.5rem;
    }
    .home-feature-icon {
        display: inline-block;
        padding: 1rem;
        border-radius: 0.75rem;
        background: var(--accent);
        font-size: 1.75rem;
        margin-bottom: 1.5rem;
    }
    .home-feature-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .home-feature-card p {
        color: var(--muted-foreground);
        line-height: 1.7;
    }
    .home-footer {
        position: relative;
        z-index: 10;
        border-top: 1px solid var(--border);
        padding: 3rem 1rem;
    }
    .home-footer-content {
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 80rem;
        margin: 0 auto;
    }
    .home-footer-legal {
        color: var(--muted-foreground);
        font-size: 0.875rem;
    }
    .home-footer-links {
        display: flex;
        gap: 2rem;
    }
    .home-footer-links a {
        color: var(--muted-foreground);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .home-footer-links a:hover {
        color: var(--foreground);
    }
    @keyframes home-rise {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 768px) {
        .home-stats,
        .home-cta-group,
        .home-footer-content {
            flex-direction: column;
        }
        .home-stat-divider {
            display: none;
        }
        .home-feature-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
