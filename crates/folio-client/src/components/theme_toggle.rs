//! Dark/light switch, persisted in localStorage.

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::hooks::use_localstorage;

const THEME_KEY: &str = "$folio$/theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Applies `theme` as a class on `<html>`.
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1(theme.toggled().class());
    let _ = classes.add_1(theme.class());
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_localstorage(THEME_KEY, || Theme::Dark);

    use_effect_with(*theme, |theme| apply_theme(*theme));

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let (icon, label) = match *theme {
        Theme::Dark => (IconData::LUCIDE_SUN, "Switch to light theme"),
        Theme::Light => (IconData::LUCIDE_MOON, "Switch to dark theme"),
    };

    html! {
        <button class="theme-toggle" aria-label={label} title={label} {onclick}>
            <Icon data={icon} width="18px" height="18px" />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_apply_theme_swaps_root_class() {
        apply_theme(Theme::Light);
        let root = gloo::utils::document().document_element().unwrap();
        assert!(root.class_list().contains("light"));
        apply_theme(Theme::Dark);
        assert!(root.class_list().contains("dark"));
        assert!(!root.class_list().contains("light"));
    }
}
