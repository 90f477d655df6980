use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found-page">
            <style>{NOT_FOUND_CSS}</style>
            <div class="not-found-glow"></div>

            <div class="not-found-content">
                <h1 class="not-found-code">{"404"}</h1>
                <div class="not-found-copy">
                    <h2>
                        {"You've Gone "}<span class="not-found-accent">{"Off-Track"}</span>
                    </h2>
                    <p>
                        {"The road you are looking for has been bypassed. Even a Zonda R can't find this coordinate in our garage."}
                    </p>
                    <Link<Route> to={Route::Home} classes="not-found-return">
                        {"Return to Starting Line →"}
                    </Link<Route>>
                </div>
            </div>

            <div class="not-found-footer">
                <div class="not-found-rule"></div>
                <p>{"Pagani Automobili"}</p>
            </div>
        </div>
    }
}

const NOT_FOUND_CSS: &str = r#"
    .not-found-page {
        min-height: 100vh;
        background: #0a0a0a;
        color: #fff;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 1.5rem;
        position: relative;
        overflow: hidden;
    }
    .not-found-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 600px;
        height: 600px;
        transform: translate(-50%, -50%);
        background: rgba(255, 255, 255, 0.1);
        border-radius: 9999px;
        filter: blur(120px);
        opacity: 0.2;
        pointer-events: none;
    }
    .not-found-content {
        position: relative;
        z-index: 10;
        text-align: center;
    }
    .not-found-code {
        font-size: clamp(12rem, 25vw, 18rem);
        font-weight: 900;
        font-style: italic;
        letter-spacing: -0.05em;
        line-height: 1;
        opacity: 0.1;
        margin: 0;
    }
    .not-found-copy {
        margin-top: -6rem;
    }
    .not-found-copy h2 {
        font-size: 2.25rem;
        font-weight: 300;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        margin-bottom: 1rem;
    }
    .not-found-accent {
        color: #f59e0b;
        font-weight: 500;
    }
    .not-found-copy p {
        color: #71717a;
        max-width: 28rem;
        margin: 0 auto 2.5rem;
        line-height: 1.7;
        font-weight: 300;
    }
    .not-found-return {
        display: inline-flex;
        align-items: center;
        padding: 0.75rem 2rem;
        background: #18181b;
        border: 1px solid #27272a;
        border-radius: 2px;
        color: #fff;
        text-decoration: none;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-size: 0.75rem;
        transition: background 0.3s ease;
    }
    .not-found-return:hover {
        background: #27272a;
    }
    .not-found-footer {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        opacity: 0.4;
    }
    .not-found-rule {
        height: 1px;
        width: 5rem;
        background: #3f3f46;
        margin-bottom: 1rem;
    }
    .not-found-footer p {
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.5em;
        color: #a1a1aa;
    }
"#;
