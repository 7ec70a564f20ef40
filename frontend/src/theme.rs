use log::debug;
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Chooses between the dark and light variant of a class list.
    pub fn pick<'a>(self, dark: &'a str, light: &'a str) -> &'a str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn name(self) -> &'static str {
        self.pick("dark", "light")
    }
}

/// What every view needs to know about theming. Passed down through a
/// `ContextProvider`, never read from a global.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub initial: Theme,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| props.initial);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            debug!("theme -> {}", next.name());
            theme.set(next);
        })
    };

    // Keep <html class="dark"> in step for the page-level CSS
    use_effect_with_deps(
        move |theme| {
            sync_root_class(*theme);
            || ()
        },
        *theme,
    );

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

fn sync_root_class(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

/// Current theme, or the default dark theme outside a provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}
