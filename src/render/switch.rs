//! Dark-mode switch markup.
//!
//! The page script (`embed/theme.js`) finds the switch through
//! `data-theme-switch` and keeps `data-selected`, `checked` and the
//! visible icon in sync after load.

use super::{
    html::{HtmlWriter, write_elem, write_raw, write_void_elem},
    icons,
};
use crate::theme::ThemeSwitch;
use anyhow::Result;

pub fn write_theme_switch(writer: &mut HtmlWriter, switch: &ThemeSwitch) -> Result<()> {
    let selected = switch.is_selected();
    let attrs = [
        ("class", "theme-switch"),
        ("data-theme-switch", ""),
        ("data-selected", if selected { "true" } else { "false" }),
    ];

    write_elem(writer, "label", &attrs, |w| {
        let mut input = vec![
            ("class", "theme-switch__input"),
            ("type", "checkbox"),
            ("role", "switch"),
            ("aria-label", "Toggle dark mode"),
        ];
        if selected {
            input.push(("checked", ""));
        }
        write_void_elem(w, "input", &input)?;

        write_elem(w, "span", &[("class", "theme-switch__thumb")], |w| {
            if selected {
                write_raw(w, icons::SUN)?;
                write_raw(w, &icons::hidden(icons::MOON))
            } else {
                write_raw(w, &icons::hidden(icons::SUN))?;
                write_raw(w, icons::MOON)
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::render;
    use crate::theme::{ThemePreference, ThemeStore};
    use std::sync::Arc;

    fn render_for(pref: ThemePreference) -> String {
        let switch = ThemeSwitch::new(Arc::new(ThemeStore::new(pref)));
        render(|w| write_theme_switch(w, &switch))
    }

    #[test]
    fn test_light_shows_sun() {
        let html = render_for(ThemePreference::Light);
        assert!(html.contains(r#"data-selected="true""#));
        assert!(html.contains(r#"checked="""#));
        assert!(html.contains(r#"<svg data-icon="sun""#));
        assert!(html.contains(r#"<svg hidden="" data-icon="moon""#));
    }

    #[test]
    fn test_system_shows_moon() {
        let html = render_for(ThemePreference::System);
        assert!(html.contains(r#"data-selected="false""#));
        assert!(!html.contains("checked"));
        assert!(html.contains(r#"<svg data-icon="moon""#));
        assert!(html.contains(r#"<svg hidden="" data-icon="sun""#));
    }

    #[test]
    fn test_rerender_after_toggle() {
        let store = Arc::new(ThemeStore::new(ThemePreference::Dark));
        let switch = ThemeSwitch::new(Arc::clone(&store));
        switch.toggle();
        let html = render(|w| write_theme_switch(w, &switch));
        assert!(html.contains(r#"data-selected="true""#));
    }
}
