use crate::dom;
use web_sys as web;

const LINKS: [&str; 4] = ["Marketplace", "Inventory", "Showcase", "Community"];

// Static header, nothing is wired.
pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<()> {
    let nav = dom::el_in(document, parent, "nav", "navbar")?;

    let brand = dom::el_in(document, &nav, "div", "brand")?;
    let mark = dom::el_in(document, &brand, "div", "brand-mark")?;
    dom::text_in(document, &mark, "span", "", "H")?;
    dom::text_in(document, &brand, "span", "brand-name", "HoloCard")?;

    let links = dom::el_in(document, &nav, "div", "nav-links")?;
    for text in LINKS {
        let a = dom::text_in(document, &links, "a", "nav-link", text)?;
        a.set_attribute("href", "#").map_err(dom::js_err)?;
    }

    let actions = dom::el_in(document, &nav, "div", "nav-actions")?;
    dom::text_in(document, &actions, "button", "btn btn-ghost", "Log In")?;
    dom::text_in(document, &actions, "button", "btn btn-primary", "Connect Wallet")?;
    Ok(())
}
