use crate::dom;
use crate::state::CardUiState;
use crate::tilt::{glare_gradient_css, sheen_position_css};
use crate::view::FrontLayer;
use web_sys as web;

const NOISE_SVG: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.85' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\")";

const SHEEN_GRADIENT: &str =
    "linear-gradient(115deg, transparent 0%, #54f1ff 25%, #ff2ae9 50%, #ffef42 75%, transparent 100%)";

const SHEEN_HOVER_OPACITY: &str = "0.4";

/// Holographic layers on the front face: glare, chromatic sheen and noise.
///
/// Exists only while holo is enabled; disabling it removes the nodes.
pub struct HoloOverlay {
    glare: web::HtmlElement,
    sheen: web::HtmlElement,
    noise: web::HtmlElement,
}

impl HoloOverlay {
    pub fn mount(document: &web::Document, face: &web::Element) -> anyhow::Result<Self> {
        let [glare, sheen, noise] = FrontLayer::HOLO;
        let glare = dom::el_in(document, face, "div", glare.class_name())?;
        let sheen = dom::el_in(document, face, "div", sheen.class_name())?;
        let noise = dom::el_in(document, face, "div", noise.class_name())?;
        dom::set_style(&sheen, "background-image", SHEEN_GRADIENT);
        dom::set_style(&sheen, "background-size", "200% 200%");
        dom::set_style(&noise, "background-image", NOISE_SVG);
        Ok(Self {
            glare,
            sheen,
            noise,
        })
    }

    pub fn unmount(&self) {
        self.glare.remove();
        self.sheen.remove();
        self.noise.remove();
    }

    pub fn apply(&self, state: &CardUiState) {
        let g = &state.glare;
        dom::set_style(&self.glare, "background", &glare_gradient_css(g.x, g.y));
        dom::set_style(&self.glare, "opacity", &state.glare_opacity().to_string());
        dom::set_style(&self.sheen, "background-position", &sheen_position_css(g.x, g.y));
        dom::set_style(
            &self.sheen,
            "opacity",
            if state.hovering { SHEEN_HOVER_OPACITY } else { "0" },
        );
    }
}
