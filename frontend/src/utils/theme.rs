use crate::config::THEME_STORAGE_KEY;
use crate::utils::listener::EventListener;
use std::str::FromStr;
use thiserror::Error;
use web_sys::{window, MediaQueryList};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::System => "System",
        }
    }

    /// Whether the page renders dark, given the OS colour-scheme preference.
    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => prefers_dark,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "system" => Ok(Theme::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

fn load_theme() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok())
        .flatten();
    match stored.map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            log::warn!("Ignoring stored theme: {}", e);
            Theme::default()
        }
        None => Theme::default(),
    }
}

fn store_theme(theme: Theme) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                log::warn!("Failed to persist theme: {:?}", e);
            }
        }
    }
}

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_scheme_query() -> Option<MediaQueryList> {
    window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

fn prefers_dark() -> bool {
    dark_scheme_query()
        .map(|query| query.matches())
        .unwrap_or(true)
}

fn apply_theme(dark: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(if dark { "dark" } else { "light" });
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    /// Current OS colour-scheme preference, tracked live.
    pub system_dark: bool,
    pub set_theme: Callback<Theme>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_dark)
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn ThemeProvider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(load_theme);

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            log::info!("Switching theme to {}", next.as_str());
            store_theme(next);
            theme.set(next);
        })
    };

    let system_dark = use_state_eq(prefers_dark);

    {
        let system_dark = system_dark.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dark_scheme_query().and_then(|query| {
                    EventListener::new(&query, "change", move |_| {
                        let dark = prefers_dark();
                        log::debug!("System colour scheme changed, dark = {}", dark);
                        system_dark.set(dark);
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |(theme, system_dark): &(Theme, bool)| {
            apply_theme(theme.is_dark(*system_dark));
            || ()
        },
        (*theme, *system_dark),
    );

    let context = ThemeContext {
        theme: *theme,
        system_dark: *system_dark,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        system_dark: prefers_dark(),
        set_theme: Callback::from(|_| ()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse_back() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn system_follows_preference() {
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
    }

    #[test]
    fn context_tracks_system_preference_changes() {
        let mut context = ThemeContext {
            theme: Theme::System,
            system_dark: true,
            set_theme: Callback::from(|_| ()),
        };
        assert!(context.is_dark());
        context.system_dark = false;
        assert!(!context.is_dark());

        context.theme = Theme::Dark;
        assert!(context.is_dark());
    }
}
