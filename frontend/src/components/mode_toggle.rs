use crate::utils::theme::{use_theme, Theme};
use yew::prelude::*;

#[function_component]
pub fn ModeToggle() -> Html {
    let theme = use_theme();
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let options = Theme::ALL.iter().map(|option| {
        let option = *option;
        let onclick = {
            let open = open.clone();
            let set_theme = theme.set_theme.clone();
            Callback::from(move |_: MouseEvent| {
                set_theme.emit(option);
                open.set(false);
            })
        };
        let active = (option == theme.theme).then_some("active");
        html! {
            <button class={classes!("mode-option", active)} {onclick}>{option.label()}</button>
        }
    });

    html! {
        <div class="mode-toggle">
            <style>{MODE_TOGGLE_CSS}</style>
            <button class="mode-toggle-button" aria-label="Toggle theme" onclick={toggle}>
                { if theme.is_dark() { "☾" } else { "☀" } }
            </button>
            if *open {
                <div class="mode-menu">
                    { for options }
                </div>
            }
        </div>
    }
}

const MODE_TOGGLE_CSS: &str = r#"
    .mode-toggle {
        position: relative;
    }
    .mode-toggle-button {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        border: 1px solid var(--border);
        background: transparent;
        color: var(--foreground);
        font-size: 1.1rem;
        cursor: pointer;
    }
    .mode-menu {
        position: absolute;
        right: 0;
        margin-top: 0.5rem;
        display: flex;
        flex-direction: column;
        min-width: 8rem;
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 0.5rem;
        overflow: hidden;
        z-index: 60;
    }
    .mode-option {
        padding: 0.5rem 1rem;
        text-align: left;
        background: transparent;
        border: none;
        color: var(--foreground);
        cursor: pointer;
    }
    .mode-option:hover,
    .mode-option.active {
        background: var(--accent);
    }
"#;
