use crate::dom;
use crate::view::holo_toggle_label;
use web_sys as web;

const SPARKLE_ICON: &str = r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"/></svg>"#;

/// The holographic toggle. Holds no state: the page owns the flag and
/// calls [`HoloControls::render`] after each change.
#[derive(Clone)]
pub struct HoloControls {
    button: web::HtmlElement,
    icon: web::HtmlElement,
    label: web::HtmlElement,
}

impl HoloControls {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        holo_enabled: bool,
    ) -> anyhow::Result<Self> {
        let bar = dom::el_in(document, parent, "div", "controls")?;
        let button = dom::el_in(document, &bar, "button", "holo-toggle")?;
        let icon = dom::el_in(document, &button, "span", "holo-icon")?;
        icon.set_inner_html(SPARKLE_ICON);
        let label = dom::el_in(document, &button, "span", "holo-label")?;
        let controls = Self {
            button,
            icon,
            label,
        };
        controls.render(holo_enabled);
        Ok(controls)
    }

    /// `on_toggle` is a request; it takes no arguments.
    pub fn on_toggle(&self, mut on_toggle: impl FnMut() + 'static) {
        dom::add_click_listener(&self.button, move |_ev| on_toggle());
    }

    pub fn render(&self, holo_enabled: bool) {
        self.label.set_text_content(Some(holo_toggle_label(holo_enabled)));
        dom::set_class(&self.button, "is-on", holo_enabled);
        dom::set_class(&self.icon, "pulse", holo_enabled);
    }
}
