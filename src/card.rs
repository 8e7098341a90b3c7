use crate::constants::{CARD_HEIGHT_PX, CARD_WIDTH_PX};
use crate::data::{serial_id, CardRecord};
use crate::dom;
use crate::overlay::HoloOverlay;
use crate::state::{CardUiState, Face, HoloChange};
use crate::tilt::{
    flip_transform_css, normalize_pointer, perspective_css, tilt_transform_css, CardRect,
    TiltConfig,
};
use crate::view::{back_readouts, front_layers, FrontLayer, LORE};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const BOLT_ICON: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z"/></svg>"#;
const FLIP_ICON: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/></svg>"#;

/// One mounted card: its DOM handles plus the UI state driving them.
pub struct CardView {
    pub record: CardRecord,
    pub root: web::HtmlElement,
    tilt: web::HtmlElement,
    flipper: web::HtmlElement,
    front_inner: web::HtmlElement,
    overlay: Option<HoloOverlay>,
    state: CardUiState,
    config: TiltConfig,
}

pub type SharedCard = Rc<RefCell<CardView>>;

impl CardView {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        record: CardRecord,
        holo_enabled: bool,
    ) -> anyhow::Result<SharedCard> {
        let config = TiltConfig::default();

        let root = dom::el_in(document, parent, "div", "card")?;
        dom::set_style(&root, "perspective", &perspective_css(&config));
        dom::set_style(&root, "width", &format!("{}px", CARD_WIDTH_PX));
        dom::set_style(&root, "height", &format!("{}px", CARD_HEIGHT_PX));
        let tilt = dom::el_in(document, &root, "div", "card-tilt")?;
        let flipper = dom::el_in(document, &tilt, "div", "card-flipper")?;

        let front = dom::el_in(document, &flipper, "div", "card-face card-front")?;
        let front_inner = framed_face(document, &front, &record, "card-inner")?;
        let mut front_flip = None;
        for layer in front_layers(false) {
            let node = build_front_layer(document, &front_inner, layer, &record)?;
            if layer == FrontLayer::FlipButton {
                front_flip = Some(node);
            }
        }

        let back = dom::el_in(document, &flipper, "div", "card-face card-back")?;
        let back_inner = framed_face(document, &back, &record, "card-inner card-inner-back")?;
        let back_flip = build_back(document, &back_inner, &record)?;

        let overlay = if holo_enabled {
            Some(HoloOverlay::mount(document, &front_inner)?)
        } else {
            None
        };

        let card = Rc::new(RefCell::new(CardView {
            record,
            root,
            tilt,
            flipper,
            front_inner,
            overlay,
            state: CardUiState::new(holo_enabled),
            config,
        }));

        for button in front_flip.iter().chain(std::iter::once(&back_flip)) {
            let card = card.clone();
            dom::add_click_listener(button, move |ev| {
                ev.stop_propagation();
                card.borrow_mut().flip();
            });
        }

        card.borrow().render();
        log::info!("[card] mounted #{} {}", record.id, record.title);
        log::debug!("[card] #{} catalog image {}", record.id, record.image);
        Ok(card)
    }

    pub fn render(&self) {
        let s = &self.state;
        dom::set_style(
            &self.tilt,
            "transform",
            &tilt_transform_css(s.tilt.x, s.tilt.y, s.scale(&self.config)),
        );
        dom::set_style(&self.flipper, "transform", flip_transform_css(s.flipped));
        dom::set_class(&self.root, "is-hovering", s.hovering);
        dom::set_class(&self.root, "is-flipped", s.face() == Face::Back);
        if let Some(overlay) = &self.overlay {
            overlay.apply(s);
        }
    }

    pub fn pointer_enter(&mut self) {
        self.state.pointer_enter();
        self.render();
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        let r = self.tilt.get_bounding_client_rect();
        let rect = CardRect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        };
        let sample = normalize_pointer(client, &rect);
        if self.state.pointer_move(sample, &self.config) {
            log::debug!(
                "[card] #{} tilt=({:.2},{:.2})",
                self.record.id,
                self.state.tilt.x,
                self.state.tilt.y
            );
            self.render();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.state.pointer_leave();
        self.render();
    }

    pub fn flip(&mut self) {
        let face = self.state.toggle_flip();
        log::info!("[card] #{} showing {:?}", self.record.id, face);
        self.render();
    }

    /// Add or remove the holographic layers; tilt and flip are left alone.
    pub fn set_holo(&mut self, document: &web::Document, enabled: bool) -> anyhow::Result<()> {
        match self.state.set_holo(enabled) {
            HoloChange::Mount => {
                self.overlay = Some(HoloOverlay::mount(document, &self.front_inner)?);
            }
            HoloChange::Unmount => {
                if let Some(overlay) = self.overlay.take() {
                    overlay.unmount();
                }
            }
            HoloChange::Keep => {}
        }
        self.render();
        Ok(())
    }
}

// Gradient border + dark inner panel shared by both faces.
fn framed_face(
    document: &web::Document,
    face: &web::Element,
    record: &CardRecord,
    inner_class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let border = dom::el_in(document, face, "div", "card-border")?;
    dom::set_style(&border, "background", record.palette.css_gradient());
    dom::el_in(document, &border, "div", inner_class)
}

fn build_front_layer(
    document: &web::Document,
    inner: &web::Element,
    layer: FrontLayer,
    record: &CardRecord,
) -> anyhow::Result<web::HtmlElement> {
    match layer {
        FrontLayer::Image => {
            let img = dom::el_in(document, inner, "img", layer.class_name())?;
            img.set_attribute("src", &record.image_src())
                .map_err(dom::js_err)?;
            img.set_attribute("alt", record.title).map_err(dom::js_err)?;
            Ok(img)
        }
        FrontLayer::Content => build_front_content(document, inner, record),
        FrontLayer::FlipButton => {
            let button = dom::el_in(document, inner, "button", layer.class_name())?;
            button.set_title("Flip Card");
            button.set_inner_html(FLIP_ICON);
            Ok(button)
        }
        _ => dom::el_in(document, inner, "div", layer.class_name()),
    }
}

fn build_front_content(
    document: &web::Document,
    inner: &web::Element,
    record: &CardRecord,
) -> anyhow::Result<web::HtmlElement> {
    let content = dom::el_in(document, inner, "div", FrontLayer::Content.class_name())?;

    let header = dom::el_in(document, &content, "div", "card-header")?;
    let pill = dom::el_in(document, &header, "div", "rarity-pill")?;
    dom::text_in(document, &pill, "span", "rarity", record.rarity)?;
    let badge = dom::el_in(document, &header, "div", "badge")?;
    badge.set_inner_html(BOLT_ICON);

    let footer = dom::el_in(document, &content, "div", "card-footer")?;
    dom::text_in(document, &footer, "h2", "card-title", record.title)?;
    dom::el_in(document, &footer, "div", "title-rule")?;
    if let Some(stats) = record.stats {
        let row = dom::el_in(document, &footer, "div", "stat-row")?;
        let atk = dom::el_in(document, &row, "div", "stat")?;
        dom::text_in(document, &atk, "span", "stat-label atk", "ATK")?;
        dom::text_in(document, &atk, "span", "stat-value", &stats.atk.to_string())?;
        dom::el_in(document, &row, "div", "stat-divider")?;
        let def = dom::el_in(document, &row, "div", "stat")?;
        dom::text_in(document, &def, "span", "stat-label def", "DEF")?;
        dom::text_in(document, &def, "span", "stat-value", &stats.def.to_string())?;
    }
    Ok(content)
}

/// Builds the back face and returns its flip button.
fn build_back(
    document: &web::Document,
    inner: &web::Element,
    record: &CardRecord,
) -> anyhow::Result<web::HtmlElement> {
    let content = dom::el_in(document, inner, "div", "back-content")?;

    let header = dom::el_in(document, &content, "div", "back-header")?;
    let serial = serial_id(&mut rand::thread_rng());
    dom::text_in(document, &header, "span", "serial", &format!("ID: #{}", serial))?;
    let lights = dom::el_in(document, &header, "div", "status-lights")?;
    for class in ["light red", "light yellow", "light green"] {
        dom::el_in(document, &lights, "div", class)?;
    }

    let stats = dom::el_in(document, &content, "div", "back-section")?;
    dom::text_in(document, &stats, "h3", "section-title", "System Stats")?;
    let grid = dom::el_in(document, &stats, "div", "readout-grid")?;
    for readout in back_readouts(record.stats) {
        let cell = dom::el_in(document, &grid, "div", "readout")?;
        dom::text_in(document, &cell, "div", "readout-label", readout.label)?;
        let class = if readout.accent {
            "readout-value accent"
        } else {
            "readout-value"
        };
        dom::text_in(document, &cell, "div", class, &readout.value)?;
    }

    let lore = dom::el_in(document, &content, "div", "back-section lore")?;
    dom::text_in(document, &lore, "h3", "section-title", "Lore Entry")?;
    dom::text_in(document, &lore, "p", "lore-text", LORE)?;

    let barcode_row = dom::el_in(document, &content, "div", "barcode-row")?;
    dom::el_in(document, &barcode_row, "div", "barcode")?;

    let flip = dom::el_in(document, &content, "button", "flip-btn flip-btn-back")?;
    flip.set_title("Flip Card");
    flip.set_inner_html(FLIP_ICON);

    dom::el_in(document, inner, "div", "back-mesh")?;
    Ok(flip)
}
