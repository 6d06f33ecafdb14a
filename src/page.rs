//! Builds the page sections from [`PageContent`] under `#page-root`.

use crate::constants::{HERO_CANVAS_ID, HERO_CAPTION_ID, HERO_CSS_STAGE_ID, HERO_ID};
use crate::core::reveal::{RevealStyle, ViewReveal};
use crate::core::{Feature, PageContent, Section};
use crate::dom::{self, append, append_lines, el, text_el};
use crate::events::{self, ListenerGuard};
use crate::hero;
use web_sys as web;

/// An element animated in once when it scrolls into view.
pub struct RevealTarget {
    pub element: web::HtmlElement,
    pub reveal: ViewReveal,
}

pub struct HeroElements {
    pub section: web::HtmlElement,
    pub title: web::HtmlElement,
    pub nav: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub css_stage: web::HtmlElement,
    pub css_chair: web::HtmlElement,
    pub caption: web::HtmlElement,
    pub blocks: Vec<web::HtmlElement>,
}

pub struct MountedPage {
    pub hero: HeroElements,
    pub reveals: Vec<RevealTarget>,
    pub listeners: Vec<ListenerGuard>,
}

pub fn mount(
    document: &web::Document,
    root: &web::Element,
    content: &PageContent,
    initial_caption: usize,
) -> anyhow::Result<MountedPage> {
    root.set_inner_html("");
    let main = el(document, "div", "page")?;
    append(root, &main)?;

    let mut reveals = Vec::new();
    let mut listeners = Vec::new();

    let hero = build_hero(document, &main, content, initial_caption, &mut listeners)?;
    build_features(document, &main, content, &mut reveals)?;
    build_gallery(document, &main, content, &mut reveals)?;
    build_specs(document, &main, content, &mut reveals)?;
    build_preorder(document, &main, content, &mut reveals)?;
    build_footer(document, &main, content)?;

    log::info!(
        "[page] mounted: {} features, {} images, {} specs, {} reveal targets",
        content.features.len(),
        content.gallery.len(),
        content.specs.len(),
        reveals.len()
    );
    Ok(MountedPage {
        hero,
        reveals,
        listeners,
    })
}

fn build_hero(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
    initial_caption: usize,
    listeners: &mut Vec<ListenerGuard>,
) -> anyhow::Result<HeroElements> {
    let hero = &content.hero;
    let section = el(document, "section", "hero")?;
    section.set_id(HERO_ID);
    append(main, &section)?;

    let title = text_el(document, "h1", "hero-title", &hero.title)?;
    dom::set_style(&title, "opacity", "0");
    append(&section, &title)?;

    let stage = el(document, "div", "hero-stage")?;
    append(&section, &stage)?;

    let canvas: web::HtmlCanvasElement = {
        use wasm_bindgen::JsCast;
        let c = document.create_element("canvas").map_err(dom::js_err)?;
        c.set_id(HERO_CANVAS_ID);
        c.set_class_name("hero-canvas");
        c.dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
    };
    if hero.settings.orbit {
        _ = canvas.style().set_property("touch-action", "none");
    }
    append(&stage, &canvas)?;

    let css_stage = el(document, "div", "hero-css")?;
    css_stage.set_id(HERO_CSS_STAGE_ID);
    let css_chair = el(document, "div", "hero-css-chair")?;
    css_chair.set_inner_html(hero::CHAIR_SVG);
    append(&css_stage, &css_chair)?;
    append(&stage, &css_stage)?;

    let mut blocks = Vec::with_capacity(hero.blocks.len());
    for block in &hero.blocks {
        let wrapper = el(document, "div", &format!("scroll-block {}", block.side.class_name()))?;
        dom::set_style(&wrapper, "opacity", "0");
        let heading = el(document, "h2", "")?;
        append_lines(document, &heading, &block.text)?;
        append(&wrapper, &heading)?;
        append(&section, &wrapper)?;
        blocks.push(wrapper);
    }

    let caption_text = hero
        .captions
        .get(initial_caption)
        .map(String::as_str)
        .unwrap_or("");
    let caption = text_el(document, "p", "hero-caption", caption_text)?;
    caption.set_id(HERO_CAPTION_ID);
    append(&section, &caption)?;

    let nav = el(document, "nav", "hero-nav")?;
    for link in &hero.nav {
        let button = text_el(document, "button", "hero-nav-button", &link.label)?;
        _ = button.set_attribute("type", "button");
        if let Some(section_id) = &link.section {
            listeners.push(events::wire_nav_button(&button, section_id.clone())?);
        }
        append(&nav, &button)?;
    }
    append(&section, &nav)?;

    Ok(HeroElements {
        section,
        title,
        nav,
        canvas,
        css_stage,
        css_chair,
        caption,
        blocks,
    })
}

fn section_shell(
    document: &web::Document,
    main: &web::HtmlElement,
    section: &Section,
    class: &str,
    reveals: &mut Vec<RevealTarget>,
) -> anyhow::Result<web::HtmlElement> {
    let shell = el(document, "section", class)?;
    shell.set_id(&section.id);
    let heading = text_el(document, "h2", "section-heading", &section.heading)?;
    append(&shell, &heading)?;
    track(&heading, RevealStyle::HEADING, reveals);
    append(main, &shell)?;
    Ok(shell)
}

/// Start an element hidden and register it for a one-shot reveal.
fn track(element: &web::HtmlElement, style: RevealStyle, reveals: &mut Vec<RevealTarget>) {
    let reveal = ViewReveal::new(style);
    hero::apply_reveal(element, reveal.sample(0.0));
    reveals.push(RevealTarget {
        element: element.clone(),
        reveal,
    });
}

fn build_features(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
    reveals: &mut Vec<RevealTarget>,
) -> anyhow::Result<()> {
    let shell = section_shell(document, main, &content.features_section, "features", reveals)?;
    let grid = el(document, "div", "features-grid")?;
    for feature in &content.features {
        let card = feature_card(document, feature)?;
        append(&grid, &card)?;
        track(&card, RevealStyle::CARD, reveals);
    }
    append(&shell, &grid)
}

fn feature_card(document: &web::Document, feature: &Feature) -> anyhow::Result<web::HtmlElement> {
    let card = el(document, "div", "feature-card")?;
    let icon = el(document, "div", "feature-icon")?;
    icon.set_inner_html(&icon_svg(&feature.icon));
    append(&card, &icon)?;
    append(&card, &text_el(document, "h3", "", &feature.title)?)?;
    append(&card, &text_el(document, "p", "", &feature.description)?)?;
    Ok(card)
}

/// Stroked 24x24 icon from path data. Path strings come from the bundled
/// content file; quotes are dropped so they cannot escape the attribute.
pub fn icon_svg(paths: &[String]) -> String {
    let body: String = paths
        .iter()
        .map(|d| format!("<path d=\"{}\"/>", d.replace(['"', '<', '>'], "")))
        .collect();
    format!(
        "<svg viewBox=\"0 0 24 24\" width=\"40\" height=\"40\" fill=\"none\" stroke=\"currentColor\" \
         stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">{}</svg>",
        body
    )
}

fn build_gallery(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
    reveals: &mut Vec<RevealTarget>,
) -> anyhow::Result<()> {
    let shell = section_shell(document, main, &content.gallery_section, "gallery", reveals)?;
    let grid = el(document, "div", "gallery-grid")?;
    for (i, image) in content.gallery.iter().enumerate() {
        let frame = el(document, "div", "gallery-frame")?;
        let img = el(document, "img", "")?;
        let alt = image
            .alt
            .clone()
            .unwrap_or_else(|| format!("Lifestyle image {}", i + 1));
        _ = img.set_attribute("src", &image.src);
        _ = img.set_attribute("alt", &alt);
        _ = img.set_attribute("width", "600");
        _ = img.set_attribute("height", "400");
        if i > 0 {
            _ = img.set_attribute("loading", "lazy");
        }
        append(&frame, &img)?;
        append(&grid, &frame)?;
        track(&frame, RevealStyle::grow(i as f32 * 0.2, 0.7, 0.95), reveals);
    }
    append(&shell, &grid)
}

fn build_specs(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
    reveals: &mut Vec<RevealTarget>,
) -> anyhow::Result<()> {
    let shell = section_shell(document, main, &content.specs_section, "specs", reveals)?;
    let list = el(document, "dl", "specs-grid")?;
    for row in &content.specs {
        let item = el(document, "div", "spec-row")?;
        append(&item, &text_el(document, "dt", "", &row.label)?)?;
        append(&item, &text_el(document, "dd", "", &row.value)?)?;
        append(&list, &item)?;
        track(&item, RevealStyle::SPEC_ROW, reveals);
    }
    append(&shell, &list)
}

fn build_preorder(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
    reveals: &mut Vec<RevealTarget>,
) -> anyhow::Result<()> {
    let preorder = &content.preorder;
    let shell = el(document, "section", "preorder")?;
    shell.set_id(&preorder.id);
    let heading = text_el(document, "h2", "section-heading", &preorder.heading)?;
    append(&shell, &heading)?;
    track(&heading, RevealStyle::HEADING, reveals);
    let button = text_el(document, "button", "preorder-button", &preorder.button)?;
    _ = button.set_attribute("type", "button");
    append(&shell, &button)?;
    append(main, &shell)
}

fn build_footer(
    document: &web::Document,
    main: &web::HtmlElement,
    content: &PageContent,
) -> anyhow::Result<()> {
    let footer = &content.footer;
    let shell = el(document, "footer", "footer")?;
    let top = el(document, "div", "footer-top")?;
    append(&top, &text_el(document, "div", "footer-brand", &footer.brand)?)?;
    let nav = el(document, "nav", "footer-nav")?;
    for link in &footer.links {
        let a = text_el(document, "a", "", &link.label)?;
        _ = a.set_attribute("href", &link.href);
        append(&nav, &a)?;
    }
    append(&top, &nav)?;
    append(&shell, &top)?;

    if footer.credit.is_some() || footer.credit_link.is_some() {
        let credit = el(document, "div", "footer-credit")?;
        if let Some(text) = &footer.credit {
            append(&credit, &document.create_text_node(text))?;
        }
        if let Some(link) = &footer.credit_link {
            append(&credit, &document.create_text_node(" "))?;
            let a = text_el(document, "a", "", &link.label)?;
            _ = a.set_attribute("href", &link.href);
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noopener noreferrer");
            append(&credit, &a)?;
        }
        append(&shell, &credit)?;
    }
    append(main, &shell)
}
